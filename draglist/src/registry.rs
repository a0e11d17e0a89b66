use crate::error::{ValidationError, validate_height};
use crate::key::{ItemKey, KeyMap, KeySet};
use crate::Recorded;

/// Last reported height per item id.
///
/// The registry knows the current item set: reports for ids outside it are ignored, and
/// [`HeightRegistry::prune`] both replaces the set and drops entries that left it, so an
/// entry never outlives its item.
#[derive(Clone, Debug)]
pub struct HeightRegistry<K> {
    members: KeySet<K>,
    heights: KeyMap<K, f32>,
}

impl<K: ItemKey> Default for HeightRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ItemKey> HeightRegistry<K> {
    /// Creates a registry for an empty item set.
    pub fn new() -> Self {
        Self {
            members: KeySet::new(),
            heights: KeyMap::new(),
        }
    }

    pub fn with_items<'a>(ids: impl IntoIterator<Item = &'a K>) -> Self
    where
        K: 'a,
    {
        let mut r = Self::new();
        r.prune(ids);
        r
    }

    /// Upserts the height for `id`.
    ///
    /// Invalid heights are rejected before membership is checked.
    pub fn report(&mut self, id: &K, height: f32) -> Result<Recorded, ValidationError> {
        let height = validate_height(height)?;
        if !self.members.contains(id) {
            return Ok(Recorded::Ignored);
        }
        match self.heights.get_mut(id) {
            Some(cur) if *cur == height => Ok(Recorded::Unchanged),
            Some(cur) => {
                *cur = height;
                Ok(Recorded::Updated)
            }
            None => {
                self.heights.insert(id.clone(), height);
                Ok(Recorded::Inserted)
            }
        }
    }

    pub fn get(&self, id: &K) -> Option<f32> {
        self.heights.get(id).copied()
    }

    pub fn contains(&self, id: &K) -> bool {
        self.heights.contains_key(id)
    }

    pub fn is_member(&self, id: &K) -> bool {
        self.members.contains(id)
    }

    /// Returns whether every id in `ids` has a recorded height.
    ///
    /// This checks membership per id, never the entry count.
    pub fn coverage<'a>(&self, ids: impl IntoIterator<Item = &'a K>) -> bool
    where
        K: 'a,
    {
        ids.into_iter().all(|id| self.heights.contains_key(id))
    }

    /// Makes `ids` the current item set and drops entries for ids outside it.
    ///
    /// Returns the number of dropped entries.
    pub fn prune<'a>(&mut self, ids: impl IntoIterator<Item = &'a K>) -> usize
    where
        K: 'a,
    {
        self.members = ids.into_iter().cloned().collect();
        let before = self.heights.len();
        let members = &self.members;
        self.heights.retain(|k, _| members.contains(k));
        before - self.heights.len()
    }

    /// Number of recorded heights.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn for_each(&self, mut f: impl FnMut(&K, f32)) {
        for (k, v) in self.heights.iter() {
            f(k, *v);
        }
    }
}
