use crate::Point;

/// Where in a gesture an event belongs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// `mousedown` / `touchstart`
    Start,
    /// `mousemove` / `touchmove`
    Move,
    /// `mouseup` / `touchend`
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// A host pointer event, reduced to what the tracker needs.
///
/// Touch lists are borrowed from the host; nothing is copied until the event is normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent<'a> {
    Mouse {
        phase: PointerPhase,
        client: Point,
    },
    Touch {
        phase: PointerPhase,
        /// Touches currently on the surface.
        touches: &'a [Point],
        /// Touches that changed in this event.
        changed_touches: &'a [Point],
    },
}

impl<'a> PointerEvent<'a> {
    pub fn mouse(phase: PointerPhase, client: Point) -> Self {
        Self::Mouse { phase, client }
    }

    pub fn touch(phase: PointerPhase, touches: &'a [Point], changed_touches: &'a [Point]) -> Self {
        Self::Touch {
            phase,
            touches,
            changed_touches,
        }
    }

    pub fn phase(&self) -> PointerPhase {
        match *self {
            Self::Mouse { phase, .. } | Self::Touch { phase, .. } => phase,
        }
    }

    pub fn source(&self) -> PointerSource {
        match self {
            Self::Mouse { .. } => PointerSource::Mouse,
            Self::Touch { .. } => PointerSource::Touch,
        }
    }

    /// Reduces the event to a single client position.
    ///
    /// Touch start/move read the first active touch; touch end reads the first changed touch,
    /// since the lifted finger is no longer in `touches`. Returns `None` when the event carries
    /// no usable point.
    pub fn client_position(&self) -> Option<Point> {
        match *self {
            Self::Mouse { client, .. } => Some(client),
            Self::Touch {
                phase,
                touches,
                changed_touches,
            } => {
                let (first, fallback) = match phase {
                    PointerPhase::Start | PointerPhase::Move => (touches, changed_touches),
                    PointerPhase::End => (changed_touches, touches),
                };
                first.first().or_else(|| fallback.first()).copied()
            }
        }
    }
}
