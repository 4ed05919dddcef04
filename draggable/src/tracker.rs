use crate::clamp::{compute_limits, raw_delta, resolve_delta};
use crate::{
    BoundingRect, ClampBounds, ClampRect, DragOptions, DragState, Limits, Point, PointerEvent,
    PointerPhase, PointerSource, Size, TargetProps,
};

/// Geometry queries the tracker makes at gesture start.
pub trait Measure {
    /// The target's current bounding box, or `None` if no target is bound.
    fn target_rect(&self) -> Option<BoundingRect>;

    /// The window's inner size. Only queried in viewport-clamp mode.
    fn viewport_size(&self) -> Size;
}

/// Plain-data [`Measure`] for hosts that measure up front (and for tests).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub target: Option<BoundingRect>,
    pub viewport: Size,
}

impl Measure for Geometry {
    fn target_rect(&self) -> Option<BoundingRect> {
        self.target
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

/// State captured at press and dropped at release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position at gesture start.
    pub initial: Point,
    /// Limits computed at gesture start; `None` when clamping is off or nothing was measured.
    pub limits: Option<Limits>,
    pub source: PointerSource,
}

/// What a pointer event did to the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// The event did not apply (wrong state, second pointer, or no usable position).
    Ignored,
    Started,
    Moved(Point),
    Released(Point),
}

impl Transition {
    /// The delta published by this transition, if any.
    pub fn delta(&self) -> Option<Point> {
        match *self {
            Self::Moved(d) | Self::Released(d) => Some(d),
            Self::Ignored | Self::Started => None,
        }
    }

    /// Press and release listeners are non-passive; move listeners are passive.
    pub fn should_prevent_default(&self) -> bool {
        matches!(self, Self::Started | Self::Released(_))
    }
}

/// A headless drag-interaction state machine.
///
/// Two states: idle and dragging (a [`DragSession`] is present). The tracker owns no UI objects
/// and registers no listeners; an adapter feeds it pointer positions and geometry, and reacts to
/// the returned deltas/transitions.
///
/// ```
/// use draggable::{DragOptions, DragTracker, Geometry, Point, PointerSource};
///
/// let mut t = DragTracker::new(DragOptions::default());
/// t.press(Point::new(10.0, 10.0), PointerSource::Mouse, &Geometry::default());
/// t.move_to(Point::new(15.0, 12.0));
/// assert_eq!(t.release(Point::new(15.0, 12.0)), Some(Point::new(5.0, 2.0)));
/// assert_eq!(t.committed(), Point::new(5.0, 2.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    options: DragOptions,
    prev: Point,
    delta: Point,
    session: Option<DragSession>,
}

impl DragTracker {
    pub fn new(options: DragOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    /// Replaces the configuration.
    ///
    /// Takes effect from the next press: limits of an active gesture are not recomputed.
    pub fn set_options(&mut self, options: DragOptions) {
        dtrace!(?options, "DragTracker::set_options");
        self.options = options;
    }

    pub fn update_options(&mut self, f: impl FnOnce(&mut DragOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    /// Live offset, including the gesture in progress.
    pub fn delta(&self) -> Point {
        self.delta
    }

    /// Offset committed by completed gestures.
    pub fn committed(&self) -> Point {
        self.prev
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn limits(&self) -> Option<Limits> {
        self.session.and_then(|s| s.limits)
    }

    pub fn target_props(&self) -> TargetProps {
        TargetProps::grabbed(self.is_dragging())
    }

    pub fn state(&self) -> DragState {
        DragState {
            delta: self.delta,
            committed: self.prev,
            dragging: self.is_dragging(),
        }
    }

    /// Starts a gesture at `at`.
    ///
    /// Returns `false` (and changes nothing) if a gesture is already active: the first pointer
    /// wins. When clamping is configured but `measure` has no target, the gesture runs
    /// unclamped.
    pub fn press(&mut self, at: Point, source: PointerSource, measure: &impl Measure) -> bool {
        if self.session.is_some() {
            dtrace!(x = at.x, y = at.y, ?source, "press ignored: gesture already active");
            return false;
        }

        let limits = self.options.clamp_bounds().and_then(|bounds| {
            let Some(target) = measure.target_rect() else {
                ddebug!("no target bound at gesture start; dragging unclamped");
                return None;
            };
            let reference = match bounds {
                ClampBounds::Viewport => ClampRect::from_size(measure.viewport_size()),
                ClampBounds::Rect(rect) => rect,
            };
            let limits = compute_limits(target, self.delta, reference)
                .resolve_inverted(self.options.inverted_limits, self.delta);
            Some(limits)
        });

        ddebug!(x = at.x, y = at.y, ?source, ?limits, "drag start");
        self.session = Some(DragSession {
            initial: at,
            limits,
            source,
        });
        true
    }

    /// Updates the live delta from a pointer move. Returns `None` while idle.
    pub fn move_to(&mut self, at: Point) -> Option<Point> {
        let session = self.session?;
        let delta = resolve_delta(raw_delta(at, session.initial, self.prev), session.limits);
        dtrace!(x = delta.x, y = delta.y, "drag move");
        self.delta = delta;
        Some(delta)
    }

    /// Ends the gesture at `at` and commits its final delta. Returns `None` while idle.
    pub fn release(&mut self, at: Point) -> Option<Point> {
        let delta = self.move_to(at)?;
        self.prev = delta;
        self.session = None;
        ddebug!(x = delta.x, y = delta.y, "drag end");
        Some(delta)
    }

    /// Routes a host pointer event to `press`/`move_to`/`release` by phase.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent<'_>,
        measure: &impl Measure,
    ) -> Transition {
        let Some(at) = event.client_position() else {
            dtrace!(phase = ?event.phase(), "pointer event without a position");
            return Transition::Ignored;
        };
        match event.phase() {
            PointerPhase::Start => {
                if self.press(at, event.source(), measure) {
                    Transition::Started
                } else {
                    Transition::Ignored
                }
            }
            PointerPhase::Move => self.move_to(at).map_or(Transition::Ignored, Transition::Moved),
            PointerPhase::End => self
                .release(at)
                .map_or(Transition::Ignored, Transition::Released),
        }
    }

    /// Zeroes both the live and the committed offset.
    ///
    /// An active gesture keeps its start position, so the next move jumps; reset while idle.
    pub fn reset(&mut self) {
        if self.session.is_some() {
            dwarn!("DragTracker::reset while dragging");
        }
        self.delta = Point::ZERO;
        self.prev = Point::ZERO;
    }

    /// Drops an active gesture without committing it; the live delta falls back to the
    /// committed offset. Safe to call while idle.
    pub fn abandon(&mut self) {
        if self.session.take().is_some() {
            ddebug!("drag abandoned");
            self.delta = self.prev;
        }
    }
}
