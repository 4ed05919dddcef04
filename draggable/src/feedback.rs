use alloc::format;
use alloc::string::String;

use crate::Point;

/// Cursor affordance written to the handle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cursor {
    /// Inline cursor cleared (the handle is not managed).
    #[default]
    Unset,
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn for_dragging(dragging: bool) -> Self {
        if dragging { Self::Grabbing } else { Self::Grab }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// `will-change` hint written to the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WillChange {
    #[default]
    Auto,
    Transform,
}

impl WillChange {
    pub fn for_dragging(dragging: bool) -> Self {
        if dragging { Self::Transform } else { Self::Auto }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Auto => "",
            Self::Transform => "transform",
        }
    }
}

/// Formats `delta` as a CSS 2D translation, e.g. `translate(10px, -4.5px)`.
pub fn css_translate(delta: Point) -> String {
    // `+ 0.0` folds -0 into 0 so a zeroed delta never prints as `-0px`.
    format!("translate({}px, {}px)", delta.x + 0.0, delta.y + 0.0)
}

/// A renderer for the visual side effects of a drag.
///
/// The tracker's math never depends on this; adapters call it after each state transition, so a
/// host can substitute inline styles with e.g. a canvas redraw.
pub trait Feedback {
    fn cursor(&mut self, cursor: Cursor);
    fn will_change(&mut self, hint: WillChange);
    fn transform(&mut self, delta: Point);
}
