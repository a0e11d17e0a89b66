use alloc::vec::Vec;

use crate::{DragState, TargetOffset};

/// A serializable snapshot of everything a render layer needs for one frame.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, which is handy
/// when the render layer lives across a process or webview boundary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListSnapshot<K> {
    pub targets: Vec<TargetOffset<K>>,
    pub drag: DragState<K>,
    pub total_height: f32,
}
