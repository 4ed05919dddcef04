use crate::ClampRect;

/// Policy for limits whose minimum exceeds the maximum on an axis.
///
/// This happens when a clamp rectangle is inverted, or when the target is larger than the
/// reference box on that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvertedLimits {
    /// Pin the axis at the delta the gesture started from. Movement on the other axis is
    /// unaffected.
    #[default]
    Freeze,
    /// Apply `min(max(v, min), max)` as-is, which snaps the axis to its maximum.
    Unchecked,
}

/// The reference box the target is kept inside of.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClampBounds {
    /// The window's client area, measured at gesture start.
    Viewport,
    /// A caller-supplied rectangle in `getBoundingClientRect` coordinates.
    Rect(ClampRect),
}

/// Configuration for [`crate::DragTracker`].
///
/// Cheap to copy; adapters typically build a new value whenever the caller's inputs change and
/// hand it to `DragTracker::set_options`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragOptions {
    /// Whether the adapter writes cursor, `will-change` and transform styles.
    pub apply_visual_feedback: bool,
    /// Keep the target inside the window's client area.
    pub clamp_to_viewport: bool,
    /// Keep the target inside this rectangle. Ignored when `clamp_to_viewport` is set.
    pub clamp_rect: Option<ClampRect>,
    pub inverted_limits: InvertedLimits,
}

impl DragOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_visual_feedback(mut self, enabled: bool) -> Self {
        self.apply_visual_feedback = enabled;
        self
    }

    pub fn with_clamp_to_viewport(mut self, enabled: bool) -> Self {
        self.clamp_to_viewport = enabled;
        self
    }

    pub fn with_clamp_rect(mut self, rect: Option<ClampRect>) -> Self {
        self.clamp_rect = rect;
        self
    }

    pub fn with_inverted_limits(mut self, policy: InvertedLimits) -> Self {
        self.inverted_limits = policy;
        self
    }

    /// Resolves which reference box (if any) clamps the delta.
    ///
    /// Viewport clamping takes precedence over a rectangle when both are configured.
    pub fn clamp_bounds(&self) -> Option<ClampBounds> {
        if self.clamp_to_viewport {
            if self.clamp_rect.is_some() {
                dtrace!("clamp_rect ignored: clamp_to_viewport takes precedence");
            }
            return Some(ClampBounds::Viewport);
        }
        self.clamp_rect.map(ClampBounds::Rect)
    }
}
