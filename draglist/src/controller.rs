use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;

use crate::error::{ConfigurationError, ValidationError, validate_height};
use crate::key::{ItemKey, KeyMap};
use crate::layout::ensure_unique_ids;
use crate::mapper::collect_targets;
use crate::{
    DragSession, DragState, HeightRegistry, Item, LayoutCalculator, LayoutResult, ListOptions,
    ListSnapshot, Recorded, TargetOffset,
};

/// Owns the measurement, layout and drag state of one reorderable list.
///
/// This type holds no UI objects. A render layer drives it through the `on_*` handlers and
/// reads back [`ListController::targets`], one [`TargetOffset`] per item in list order.
/// Every handler runs synchronously; the derived view is refreshed before it returns.
#[derive(Clone, Debug)]
pub struct ListController<K = String, C = ()> {
    options: ListOptions<K, C>,
    calculator: LayoutCalculator,

    items: Vec<Item<K, C>>,
    index: KeyMap<K, usize>,
    registry: HeightRegistry<K>,
    layout: LayoutResult<K>,
    drag: DragSession<K>,

    targets: Vec<TargetOffset<K>>,
    resting: KeyMap<K, f32>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: ItemKey, C> ListController<K, C> {
    /// Creates a controller with default options.
    pub fn new(items: impl IntoIterator<Item = Item<K, C>>) -> Result<Self, ConfigurationError> {
        Self::with_options(items, ListOptions::default())
    }

    /// Fails when two items share an id.
    pub fn with_options(
        items: impl IntoIterator<Item = Item<K, C>>,
        options: ListOptions<K, C>,
    ) -> Result<Self, ConfigurationError> {
        let items: Vec<_> = items.into_iter().collect();
        if let Err(err) = ensure_unique_ids(items.iter().map(|it| &it.id)) {
            dwarn!(count = items.len(), "ListController::new: rejected item sequence");
            return Err(err);
        }
        ddebug!(count = items.len(), gap = options.gap, "ListController::new");

        let mut c = Self {
            calculator: LayoutCalculator::with_gap(options.gap),
            options,
            index: index_items(&items),
            registry: HeightRegistry::with_items(items.iter().map(|it| &it.id)),
            items,
            layout: LayoutResult::empty(),
            drag: DragSession::new(),
            targets: Vec::new(),
            resting: KeyMap::new(),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        c.recompute_layout();
        c.refresh_targets();
        Ok(c)
    }

    pub fn options(&self) -> &ListOptions<K, C> {
        &self.options
    }

    /// Replaces the options. A gap change recomputes the layout when coverage allows.
    pub fn set_options(&mut self, options: ListOptions<K, C>) {
        let gap_changed = self.options.gap != options.gap;
        self.options = options;
        if gap_changed {
            self.calculator = LayoutCalculator::with_gap(self.options.gap);
            self.recompute_layout();
        }
        self.refresh_targets();
        self.notify();
    }

    pub fn set_gap(&mut self, gap: f32) {
        if self.options.gap == gap {
            return;
        }
        self.options.gap = gap;
        self.calculator = LayoutCalculator::with_gap(gap);
        if self.recompute_layout() {
            self.refresh_targets();
            self.notify();
        }
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&ListController<K, C>) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// A render layer typically delivers every measurement of a frame together; wrapping
    /// them here fires the callback once.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Replaces the item sequence.
    ///
    /// Heights of surviving ids are kept, entries for removed ids are pruned, and the layout
    /// is recomputed as soon as every item is measured again (immediately for a pure
    /// reorder). A running drag whose item was removed ends. On error nothing changes.
    pub fn set_items(
        &mut self,
        items: impl IntoIterator<Item = Item<K, C>>,
    ) -> Result<(), ConfigurationError> {
        let items: Vec<_> = items.into_iter().collect();
        if let Err(err) = ensure_unique_ids(items.iter().map(|it| &it.id)) {
            dwarn!(count = items.len(), "ListController::set_items: rejected item sequence");
            return Err(err);
        }

        self.index = index_items(&items);
        self.items = items;
        self.registry.prune(self.items.iter().map(|it| &it.id));
        let index = &self.index;
        self.resting.retain(|k, _| index.contains_key(k));
        ddebug!(
            count = self.items.len(),
            measured = self.registry.len(),
            "ListController::set_items"
        );

        if self
            .drag
            .active_item()
            .is_some_and(|active| !index.contains_key(active))
        {
            self.drag.end();
        }

        self.recompute_layout();
        self.refresh_targets();
        self.notify();
        Ok(())
    }

    /// Handles a measured height from the render layer.
    ///
    /// Unknown ids are ignored. Invalid heights are rejected and leave all state unchanged.
    pub fn on_height_measured(
        &mut self,
        id: &K,
        height: f32,
    ) -> Result<Recorded, ValidationError> {
        let recorded = match self.registry.report(id, height) {
            Ok(r) => r,
            Err(err) => {
                dwarn!(height, "on_height_measured: rejected height");
                return Err(err);
            }
        };
        dtrace!(height, ?recorded, "on_height_measured");
        if recorded.is_change() && self.recompute_layout() {
            self.refresh_targets();
            self.notify();
        }
        Ok(recorded)
    }

    /// Applies many height reports with at most one layout recompute.
    ///
    /// Every height is validated first; one invalid height rejects the whole batch.
    /// Returns the number of reports that changed a stored height.
    pub fn on_heights_measured(
        &mut self,
        measurements: impl IntoIterator<Item = (K, f32)>,
    ) -> Result<usize, ValidationError> {
        let measurements: Vec<_> = measurements.into_iter().collect();
        for (_, height) in &measurements {
            if let Err(err) = validate_height(*height) {
                dwarn!(
                    height = *height,
                    batch = measurements.len(),
                    "on_heights_measured: rejected batch"
                );
                return Err(err);
            }
        }

        let mut changed = 0usize;
        for (id, height) in &measurements {
            if self.registry.report(id, *height)?.is_change() {
                changed += 1;
            }
        }
        dtrace!(batch = measurements.len(), changed, "on_heights_measured");
        if changed > 0 && self.recompute_layout() {
            self.refresh_targets();
            self.notify();
        }
        Ok(changed)
    }

    /// Starts a drag on `id`. Ids outside the list are ignored.
    pub fn on_drag_start(&mut self, id: &K, pointer_y: f32) -> bool {
        if !self.index.contains_key(id) {
            dtrace!(pointer_y, "on_drag_start: unknown item, ignored");
            return false;
        }
        if !self.drag.start(id.clone(), pointer_y) {
            return false;
        }
        self.refresh_targets();
        self.notify();
        true
    }

    /// Feeds a pointer position into the running drag.
    ///
    /// `id` is informational; the session's own active item is authoritative. Moves while
    /// idle, including late moves after `on_drag_end`, are no-ops.
    pub fn on_drag_move(&mut self, id: &K, pointer_y: f32) -> bool {
        if self.drag.active_item().is_some_and(|active| active != id) {
            dtrace!(pointer_y, "on_drag_move: id differs from active item");
        }
        if self.drag.move_to(pointer_y).is_none() {
            return false;
        }
        self.refresh_targets();
        self.notify();
        true
    }

    /// Ends the running drag, whatever item `id` names. No-op while idle.
    pub fn on_drag_end(&mut self, id: &K) -> bool {
        if self.drag.active_item().is_some_and(|active| active != id) {
            dtrace!("on_drag_end: id differs from active item");
        }
        if !self.drag.end() {
            return false;
        }
        self.refresh_targets();
        self.notify();
        true
    }

    pub fn items(&self) -> &[Item<K, C>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn registry(&self) -> &HeightRegistry<K> {
        &self.registry
    }

    pub fn height_of(&self, id: &K) -> Option<f32> {
        self.registry.get(id)
    }

    /// Whether every listed item has a recorded height.
    pub fn is_covered(&self) -> bool {
        self.registry.coverage(self.items.iter().map(|it| &it.id))
    }

    /// The last fresh layout. It may be stale while coverage is incomplete.
    pub fn layout(&self) -> &LayoutResult<K> {
        &self.layout
    }

    pub fn total_height(&self) -> f32 {
        self.layout.total_height()
    }

    pub fn drag_session(&self) -> &DragSession<K> {
        &self.drag
    }

    pub fn drag_state(&self) -> &DragState<K> {
        self.drag.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn active_item(&self) -> Option<&K> {
        self.drag.active_item()
    }

    /// Per-item targets in list order.
    pub fn targets(&self) -> &[TargetOffset<K>] {
        &self.targets
    }

    pub fn target(&self, id: &K) -> Option<&TargetOffset<K>> {
        let i = self.index_of(id)?;
        self.targets.get(i)
    }

    /// Captures the derived view together with the drag state.
    pub fn snapshot(&self) -> ListSnapshot<K> {
        ListSnapshot {
            targets: self.targets.clone(),
            drag: self.drag.state().clone(),
            total_height: self.layout.total_height(),
        }
    }

    /// Replaces the layout when every item is measured. Returns whether it was replaced.
    fn recompute_layout(&mut self) -> bool {
        // A complete registry holds at least one entry per item; skip the scan otherwise.
        if self.registry.len() < self.items.len() {
            return false;
        }
        match self
            .calculator
            .compute(self.items.iter().map(|it| &it.id), &self.registry)
        {
            Ok(Some(layout)) => {
                self.layout = layout;
                true
            }
            // Ids are validated when a sequence is accepted, so only incomplete coverage
            // ends up here.
            Ok(None) | Err(_) => false,
        }
    }

    fn refresh_targets(&mut self) {
        let resting = &self.resting;
        collect_targets(
            self.items.iter().map(|it| &it.id),
            &self.layout,
            self.drag.state(),
            |id| resting.get(id).copied(),
            &mut self.targets,
        );
        for t in &self.targets {
            let settled = match self.drag.state().displacement_of(&t.id) {
                Some(distance) => t.top - distance,
                None => t.top,
            };
            self.resting.insert(t.id.clone(), settled);
        }
    }
}

fn index_items<K: ItemKey, C>(items: &[Item<K, C>]) -> KeyMap<K, usize> {
    items
        .iter()
        .enumerate()
        .map(|(i, it)| (it.id.clone(), i))
        .collect()
}
