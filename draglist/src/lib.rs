//! A headless layout and drag reconciliation engine for reorderable lists.
//!
//! For animation and render-layer glue (tweens, the animation service contract), see the
//! `draglist-adapter` crate.
//!
//! The engine turns two asynchronous input streams into one output stream:
//! - measured item heights, reported by a render layer whenever a box settles or resizes
//! - pointer drag events (start, move, end) for a single vertical pointer
//!
//! and produces, per item and in list order, the vertical offset an animation primitive
//! should converge toward. Resting offsets are prefix sums over measured heights and are
//! only recomputed once every listed item has been measured; until then the previous
//! layout stays in effect. The dragged item additionally follows the accumulated pointer
//! distance.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the ordered item sequence
//! - measured heights
//! - pointer events
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod drag;
mod error;
mod key;
mod layout;
mod mapper;
mod options;
mod registry;
mod state;
mod types;


pub use controller::ListController;
pub use drag::{DragSession, DragState};
pub use error::{ConfigurationError, ValidationError};
pub use key::ItemKey;
pub use layout::{LayoutCalculator, LayoutResult};
pub use mapper::{collect_targets, for_each_target};
pub use options::{ListOptions, OnChangeCallback};
pub use registry::HeightRegistry;
pub use state::ListSnapshot;
pub use types::{DragPhase, Item, Recorded, TargetOffset};
