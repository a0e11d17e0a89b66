use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use draglist::{
    ConfigurationError, Item, ItemKey, ListController, Recorded, TargetOffset, ValidationError,
};

use crate::{Animator, AnimatorOptions, TweenAnimator};

/// One item as it should be drawn at a given instant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame<K> {
    pub id: K,
    /// Animated offset, what the render layer turns into a transform.
    pub top: f32,
    /// Offset the animation is heading for.
    pub target: f32,
    pub is_active: bool,
}

impl<K> Frame<K> {
    pub fn z_index(&self) -> i32 {
        if self.is_active { 1 } else { 0 }
    }

    pub fn is_settled(&self) -> bool {
        self.top == self.target
    }
}

/// A framework-neutral driver that pairs a [`ListController`] with an [`Animator`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - the `on_*` handlers when the render layer measures an item or the pointer moves
/// - `tick(now_ms)` each frame, drawing the returned [`Frame`]s in list order
///
/// Every handler forwards to the controller and then pushes the fresh targets into the
/// animator, so the animation always converges on the latest layout and drag state.
pub struct AnimatedList<K = String, C = (), A = TweenAnimator<K>> {
    list: ListController<K, C>,
    animator: A,
    frames: Vec<Frame<K>>,
    preview_hook: Option<Box<dyn FnOnce() + Send>>,
}

impl<K: ItemKey, C> AnimatedList<K, C, TweenAnimator<K>> {
    /// Creates a driver with a [`TweenAnimator`].
    pub fn new(list: ListController<K, C>, options: AnimatorOptions, now_ms: u64) -> Self {
        Self::with_animator(list, TweenAnimator::new(options), now_ms)
    }
}

impl<K: ItemKey, C, A: Animator<K>> AnimatedList<K, C, A> {
    pub fn with_animator(list: ListController<K, C>, animator: A, now_ms: u64) -> Self {
        let mut a = Self {
            list,
            animator,
            frames: Vec::new(),
            preview_hook: None,
        };
        a.push_targets(now_ms);
        a
    }

    /// Registers a one-shot hook run on the first successful drag start.
    ///
    /// Render layers use it to install whatever suppresses the platform drag preview (an
    /// empty drag image, a cursor override). It never touches list state.
    pub fn with_drag_preview_hook(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.preview_hook = Some(Box::new(hook));
        self
    }

    pub fn list(&self) -> &ListController<K, C> {
        &self.list
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut A {
        &mut self.animator
    }

    pub fn into_parts(self) -> (ListController<K, C>, A) {
        (self.list, self.animator)
    }

    pub fn targets(&self) -> &[TargetOffset<K>] {
        self.list.targets()
    }

    pub fn on_height_measured(
        &mut self,
        id: &K,
        height: f32,
        now_ms: u64,
    ) -> Result<Recorded, ValidationError> {
        let recorded = self.list.on_height_measured(id, height)?;
        if recorded.is_change() {
            self.push_targets(now_ms);
        }
        Ok(recorded)
    }

    pub fn on_heights_measured(
        &mut self,
        measurements: impl IntoIterator<Item = (K, f32)>,
        now_ms: u64,
    ) -> Result<usize, ValidationError> {
        let changed = self.list.on_heights_measured(measurements)?;
        if changed > 0 {
            self.push_targets(now_ms);
        }
        Ok(changed)
    }

    pub fn on_drag_start(&mut self, id: &K, pointer_y: f32, now_ms: u64) -> bool {
        if !self.list.on_drag_start(id, pointer_y) {
            return false;
        }
        if let Some(hook) = self.preview_hook.take() {
            adebug!("running drag preview hook");
            hook();
        }
        self.push_targets(now_ms);
        true
    }

    pub fn on_drag_move(&mut self, id: &K, pointer_y: f32, now_ms: u64) -> bool {
        if !self.list.on_drag_move(id, pointer_y) {
            return false;
        }
        self.push_targets(now_ms);
        true
    }

    pub fn on_drag_end(&mut self, id: &K, now_ms: u64) -> bool {
        if !self.list.on_drag_end(id) {
            return false;
        }
        self.push_targets(now_ms);
        true
    }

    /// Replaces the item sequence and forgets animation state of removed ids.
    pub fn set_items(
        &mut self,
        items: impl IntoIterator<Item = Item<K, C>>,
        now_ms: u64,
    ) -> Result<(), ConfigurationError> {
        self.list.set_items(items)?;
        let list = &self.list;
        self.animator.retain(&|id: &K| list.index_of(id).is_some());
        self.push_targets(now_ms);
        Ok(())
    }

    /// Samples the animator for every item, in list order.
    pub fn tick(&mut self, now_ms: u64) -> &[Frame<K>] {
        self.frames.clear();
        for t in self.list.targets() {
            let top = self.animator.sample(&t.id, now_ms).unwrap_or(t.top);
            self.frames.push(Frame {
                id: t.id.clone(),
                top,
                target: t.top,
                is_active: t.is_active,
            });
        }
        atrace!(now_ms, frames = self.frames.len(), "AnimatedList::tick");
        &self.frames
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.animator.is_animating(now_ms)
    }

    fn push_targets(&mut self, now_ms: u64) {
        for t in self.list.targets() {
            self.animator.set_target(&t.id, t.top, now_ms);
        }
    }
}

impl<K: fmt::Debug, C: fmt::Debug, A: fmt::Debug> fmt::Debug for AnimatedList<K, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedList")
            .field("list", &self.list)
            .field("animator", &self.animator)
            .field("frames", &self.frames)
            .field("preview_hook", &self.preview_hook.is_some())
            .finish()
    }
}
