use crate::Point;

/// Attributes to spread onto the rendered target element.
///
/// With `feature = "serde"`, this serializes to `{"aria-grabbed": true}` while dragging and to
/// `{}` otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetProps {
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "aria-grabbed",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub aria_grabbed: Option<bool>,
}

impl TargetProps {
    pub fn grabbed(dragging: bool) -> Self {
        Self {
            aria_grabbed: dragging.then_some(true),
        }
    }

    /// Iterates the attributes that are present, as `(name, value)` pairs.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.aria_grabbed
            .filter(|grabbed| *grabbed)
            .map(|_| ("aria-grabbed", "true"))
            .into_iter()
    }
}

/// A snapshot of everything a render callback needs.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragState {
    /// Live offset, including the gesture in progress.
    pub delta: Point,
    /// Offset committed by completed gestures.
    pub committed: Point,
    pub dragging: bool,
}

impl DragState {
    pub fn target_props(&self) -> TargetProps {
        TargetProps::grabbed(self.dragging)
    }
}
