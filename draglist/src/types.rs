/// One entry of the list. Order in the owning sequence is display order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<K, C = ()> {
    pub id: K,
    /// Opaque payload, never inspected by the engine.
    pub content: C,
}

impl<K, C> Item<K, C> {
    pub fn new(id: K, content: C) -> Self {
        Self { id, content }
    }
}

impl<K> From<K> for Item<K, ()> {
    fn from(id: K) -> Self {
        Self { id, content: () }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// The value a render layer hands to its animation primitive for one item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetOffset<K> {
    pub id: K,
    /// Resting offset plus, for the active item, the live drag distance.
    pub top: f32,
    pub is_active: bool,
}

impl<K> TargetOffset<K> {
    /// Stacking precedence: the dragged item is drawn above its neighbours.
    pub fn z_index(&self) -> i32 {
        if self.is_active { 1 } else { 0 }
    }
}

/// Outcome of a single height report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recorded {
    /// First height for this id.
    Inserted,
    /// The stored height changed.
    Updated,
    /// Same height as before.
    Unchanged,
    /// The id is not part of the current item set.
    Ignored,
}

impl Recorded {
    pub fn is_change(self) -> bool {
        matches!(self, Self::Inserted | Self::Updated)
    }
}
