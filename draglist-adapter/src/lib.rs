//! Adapter utilities for the `draglist` crate.
//!
//! The `draglist` crate is UI-agnostic and stops at target offsets. This crate provides the
//! small, framework-neutral pieces a render layer needs on top of it:
//!
//! - the [`Animator`] contract for the interpolation service (`set_target` / `sample`)
//! - [`Tween`]-based smooth movement implementing it
//! - [`AnimatedList`], which forwards render and pointer events and samples frames
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animated;
mod animator;
mod key;
mod tween;

#[cfg(test)]
mod tests;

pub use animated::{AnimatedList, Frame};
pub use animator::{Animator, AnimatorOptions, TweenAnimator};
pub use tween::{Easing, Tween};
