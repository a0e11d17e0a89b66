use alloc::vec::Vec;

use crate::key::ItemKey;
use crate::{DragState, LayoutResult, TargetOffset};

/// Emits one [`TargetOffset`] per id, in the given order, without allocating.
///
/// The resting offset comes from `layout`; ids the layout does not know yet (it may be
/// stale after the item set changed) fall back to `previous(id)` and then to `0.0`. The
/// active item of a running drag additionally gets the accumulated drag distance.
///
/// Order is never changed here: overlapping offsets plus [`TargetOffset::z_index`] are the
/// only visual reordering.
pub fn for_each_target<'a, K>(
    ids: impl IntoIterator<Item = &'a K>,
    layout: &LayoutResult<K>,
    drag: &DragState<K>,
    mut previous: impl FnMut(&K) -> Option<f32>,
    mut f: impl FnMut(TargetOffset<K>),
) where
    K: ItemKey + 'a,
{
    for id in ids {
        let resting = layout.offset(id).or_else(|| previous(id)).unwrap_or(0.0);
        let (top, is_active) = match drag.displacement_of(id) {
            Some(distance) => (resting + distance, true),
            None => (resting, false),
        };
        f(TargetOffset {
            id: id.clone(),
            top,
            is_active,
        });
    }
}

/// Collects targets into `out` (clears `out` first).
///
/// Convenience wrapper around [`for_each_target`]; adapters that render every frame should
/// reuse the same buffer.
pub fn collect_targets<'a, K>(
    ids: impl IntoIterator<Item = &'a K>,
    layout: &LayoutResult<K>,
    drag: &DragState<K>,
    previous: impl FnMut(&K) -> Option<f32>,
    out: &mut Vec<TargetOffset<K>>,
) where
    K: ItemKey + 'a,
{
    out.clear();
    for_each_target(ids, layout, drag, previous, |t| out.push(t));
}
