#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

/// Bound for item ids.
///
/// With `std` ids are hashed; without it they are ordered.
#[cfg(feature = "std")]
pub trait ItemKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> ItemKey for K {}

#[cfg(not(feature = "std"))]
pub trait ItemKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> ItemKey for K {}
