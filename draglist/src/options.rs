use alloc::sync::Arc;

use crate::ListController;

/// A callback fired after a state change that altered the derived target view.
pub type OnChangeCallback<K, C> = Arc<dyn Fn(&ListController<K, C>) + Send + Sync>;

/// Configuration for [`crate::ListController`].
///
/// Cheap to clone: the callback lives in an `Arc`.
pub struct ListOptions<K = alloc::string::String, C = ()> {
    /// Space between consecutive items. The first item still rests at offset 0.
    pub gap: f32,
    /// Optional change notification, coalesced inside [`ListController::batch_update`].
    pub on_change: Option<OnChangeCallback<K, C>>,
}

impl<K, C> Default for ListOptions<K, C> {
    fn default() -> Self {
        Self {
            gap: 0.0,
            on_change: None,
        }
    }
}

impl<K, C> Clone for ListOptions<K, C> {
    fn clone(&self) -> Self {
        Self {
            gap: self.gap,
            on_change: self.on_change.clone(),
        }
    }
}

impl<K, C> ListOptions<K, C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&ListController<K, C>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K, C> core::fmt::Debug for ListOptions<K, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("gap", &self.gap)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
