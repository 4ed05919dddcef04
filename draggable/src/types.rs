use core::fmt;
use core::ops::{Add, Sub};

/// A position in client pixel space, or a displacement in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Inner dimensions of the window's client area.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A measured element box, in the same coordinate space as `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns the box shifted by `offset` (e.g. the rendered position under a translate).
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            left: self.left + offset.x,
            top: self.top + offset.y,
            ..*self
        }
    }
}

/// A reference box given by its edges.
///
/// The dragged target is kept fully inside this box when it is used for clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClampRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ClampRect {
    /// Builds a rectangle without validating edge order.
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rectangle, rejecting `right < left` or `bottom < top`.
    pub fn try_new(
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    ) -> Result<Self, InvertedRectError> {
        let rect = Self::new(left, top, right, bottom);
        if rect.is_inverted() {
            return Err(InvertedRectError { rect });
        }
        Ok(rect)
    }

    /// The viewport box: origin at `(0, 0)`, extending to the window's inner size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn is_inverted(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Returned by [`ClampRect::try_new`] when an edge pair is out of order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvertedRectError {
    pub rect: ClampRect,
}

impl fmt::Display for InvertedRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inverted clamp rectangle (left={}, top={}, right={}, bottom={})",
            self.rect.left, self.rect.top, self.rect.right, self.rect.bottom
        )
    }
}

impl core::error::Error for InvertedRectError {}

/// Admissible range of the delta on each axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Limits {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Limits {
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Clamps each axis independently as `min(max(v, min), max)`.
    ///
    /// On an inverted axis (`min > max`) this yields `max`.
    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: p.x.max(self.min_x).min(self.max_x),
            y: p.y.max(self.min_y).min(self.max_y),
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}
