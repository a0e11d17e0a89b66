use crate::error::ConfigurationError;
use crate::key::{ItemKey, KeyMap};
use crate::HeightRegistry;

/// Resting offsets for one fully measured item sequence.
///
/// A result is only ever built whole by [`LayoutCalculator::compute`]; callers replace it
/// wholesale and never patch individual offsets.
#[derive(Clone, Debug)]
pub struct LayoutResult<K> {
    offsets: KeyMap<K, f32>,
    total: f32,
}

impl<K: ItemKey> Default for LayoutResult<K> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<K: ItemKey> LayoutResult<K> {
    /// The result a list starts with before anything was measured.
    pub fn empty() -> Self {
        Self {
            offsets: KeyMap::new(),
            total: 0.0,
        }
    }

    pub fn offset(&self, id: &K) -> Option<f32> {
        self.offsets.get(id).copied()
    }

    pub fn contains(&self, id: &K) -> bool {
        self.offsets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Sum of all heights plus the gaps between them.
    pub fn total_height(&self) -> f32 {
        self.total
    }

    pub fn for_each(&self, mut f: impl FnMut(&K, f32)) {
        for (k, v) in self.offsets.iter() {
            f(k, *v);
        }
    }
}

/// Prefix sums over measured heights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutCalculator {
    gap: f32,
}

impl LayoutCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Space inserted between consecutive items. Non-finite or negative values are treated as 0.
    pub fn with_gap(gap: f32) -> Self {
        let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
        Self { gap }
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Computes resting offsets for `ids` in order.
    ///
    /// Returns `Ok(None)` when some id has no recorded height; the caller keeps whatever
    /// result it had. Duplicate ids are rejected even when coverage is incomplete.
    pub fn compute<'a, K, I>(
        &self,
        ids: I,
        registry: &HeightRegistry<K>,
    ) -> Result<Option<LayoutResult<K>>, ConfigurationError>
    where
        K: ItemKey + 'a,
        I: IntoIterator<Item = &'a K>,
        I::IntoIter: Clone,
    {
        let ids = ids.into_iter();
        ensure_unique_ids(ids.clone())?;

        let mut offsets = KeyMap::new();
        let mut running = 0.0f32;
        for (i, id) in ids.enumerate() {
            let Some(height) = registry.get(id) else {
                dtrace!(
                    index = i,
                    measured = registry.len(),
                    "LayoutCalculator::compute: incomplete coverage"
                );
                return Ok(None);
            };
            if i > 0 {
                running += self.gap;
            }
            offsets.insert(id.clone(), running);
            running += height;
        }

        ddebug!(count = offsets.len(), total = running, "LayoutCalculator::compute");
        Ok(Some(LayoutResult {
            offsets,
            total: running,
        }))
    }
}

/// Rejects sequences in which an id appears twice.
pub(crate) fn ensure_unique_ids<'a, K>(
    ids: impl IntoIterator<Item = &'a K>,
) -> Result<(), ConfigurationError>
where
    K: ItemKey + 'a,
{
    let mut positions: KeyMap<&K, usize> = KeyMap::new();
    for (i, id) in ids.into_iter().enumerate() {
        if let Some(&first) = positions.get(id) {
            return Err(ConfigurationError::DuplicateItemId {
                first,
                duplicate: i,
            });
        }
        positions.insert(id, i);
    }
    Ok(())
}
