//! Pure delta and limit math. Nothing here reads or writes tracker state.

use crate::{BoundingRect, ClampRect, InvertedLimits, Limits, Point};

/// `pointer - initial + prev`, component-wise.
pub fn raw_delta(pointer: Point, initial: Point, prev: Point) -> Point {
    pointer - initial + prev
}

/// Computes the admissible delta range that keeps `target` inside `reference`.
///
/// `target` is the box measured at gesture start, i.e. already shifted by `delta`. Subtracting
/// its position and adding `delta` back expresses the limits in delta space:
///
/// - `min_x = reference.left - target.left + delta.x`
/// - `max_x = reference.right - target.width - target.left + delta.x`
///
/// and symmetrically for y.
pub fn compute_limits(target: BoundingRect, delta: Point, reference: ClampRect) -> Limits {
    Limits {
        min_x: reference.left - target.left + delta.x,
        max_x: reference.right - target.width - target.left + delta.x,
        min_y: reference.top - target.top + delta.y,
        max_y: reference.bottom - target.height - target.top + delta.y,
    }
}

/// Applies `limits` to a raw delta, or passes it through when there are none.
pub fn resolve_delta(raw: Point, limits: Option<Limits>) -> Point {
    match limits {
        Some(limits) => limits.clamp(raw),
        None => raw,
    }
}

impl Limits {
    /// Applies an [`InvertedLimits`] policy to axes where `min > max`.
    ///
    /// `anchor` is the delta at gesture start; `Freeze` collapses an inverted axis onto it.
    pub fn resolve_inverted(self, policy: InvertedLimits, anchor: Point) -> Self {
        if !self.is_inverted() {
            return self;
        }
        dwarn!(
            min_x = self.min_x,
            max_x = self.max_x,
            min_y = self.min_y,
            max_y = self.max_y,
            ?policy,
            "inverted drag limits"
        );
        match policy {
            InvertedLimits::Unchecked => self,
            InvertedLimits::Freeze => {
                let mut out = self;
                if out.min_x > out.max_x {
                    out.min_x = anchor.x;
                    out.max_x = anchor.x;
                }
                if out.min_y > out.max_y {
                    out.min_y = anchor.y;
                    out.max_y = anchor.y;
                }
                out
            }
        }
    }
}
