//! Adapter utilities for the `draggable` crate.
//!
//! The `draggable` crate is UI-agnostic and only does the math and the state machine. This crate
//! provides the framework-neutral glue every binding needs:
//!
//! - Element refs for the target and an optional handle (falling back to the target)
//! - Listener lifetimes: press listeners while attached, document listeners only mid-gesture
//! - Inline style feedback (`cursor`, `will-change`, `transform`) when enabled
//!
//! The environment is abstracted behind [`Host`]; this crate has no DOM or GUI bindings.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod element;
mod host;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use element::ElementRef;
pub use host::{EventKind, GLOBAL_EVENTS, HANDLE_EVENTS, Host, ListenerTarget, StyleProperty};
