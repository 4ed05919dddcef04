//! A headless drag-interaction tracker.
//!
//! For element refs, listener lifetimes and style feedback, see the `draggable-adapter` crate.
//!
//! This crate turns press/move/release pointer events into a cumulative 2D offset (the
//! *delta*), optionally clamped so the dragged target stays inside the viewport or a
//! caller-supplied rectangle.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - pointer events (mouse or touch), normalized through [`PointerEvent`]
//! - the target's bounding box at gesture start, and the viewport size
//! - rendering of the resulting delta (optionally through a [`Feedback`] implementation)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod clamp;
mod feedback;
mod options;
mod pointer;
mod state;
mod tracker;
mod types;


pub use clamp::{compute_limits, raw_delta, resolve_delta};
pub use feedback::{Cursor, Feedback, WillChange, css_translate};
pub use options::{ClampBounds, DragOptions, InvertedLimits};
pub use pointer::{PointerEvent, PointerPhase, PointerSource};
pub use state::{DragState, TargetProps};
pub use tracker::{DragSession, DragTracker, Geometry, Measure, Transition};
pub use types::{BoundingRect, ClampRect, InvertedRectError, Limits, Point, Size};
