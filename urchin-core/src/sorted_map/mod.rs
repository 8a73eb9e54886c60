//! A key/value map whose entries stay retrievable in comparator order.
//!
//! `SortedMap` pairs an exact-match hash index with a key sequence kept
//! non-decreasing under a pluggable comparator over the values:
//!
//! ```text
//! User Code
//!    ↓ uses
//! SortedMap                 ← all structural changes go through here
//!    ├── index: HashMap     ← exclusive authority on key → value lookup
//!    └── order: Vec<K>      ← permutation of the index's key set, sorted
//!                             by comparator over the referenced values
//! ```
//!
//! Between mutations the two sides always agree: `order` holds exactly the
//! keys of `index`, with no duplicates, and for any `i < j` the value at
//! `order[j]` is never less than the value at `order[i]`.
//!
//! The map is not safe for structural mutation concurrent with iteration or
//! with another mutation; callers serialize access externally. This keeps the
//! single-threaded path free of locking overhead.

mod batch;
mod bounds;
mod iter;
mod mutation;

pub use iter::Iter;

use std::collections::HashMap;
use std::hash::Hash;

use crate::comparator::{self, LessFn};

/// An owned key/value pair, used by batch operations and channel delivery.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record<K, V> {
    pub key: K,
    pub val: V,
}

/// Map from unique keys to values, iterable in comparator order.
///
/// # Example
///
/// ```
/// use urchin_core::{SortedMap, comparator};
///
/// let mut map = SortedMap::new(Some(comparator::asc::<i64>));
///
/// assert!(map.insert("b", 2));
/// assert!(map.insert("a", 1));
/// assert!(map.insert("c", 3));
/// assert!(!map.insert("a", 9)); // Key already present.
///
/// let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec!["a", "b", "c"]);
/// ```
///
#[derive(Clone)]
pub struct SortedMap<K, V> {
    pub(crate) index: HashMap<K, V>,
    pub(crate) order: Vec<K>,
    pub(crate) less_fn: LessFn<V>,
}

impl<K, V> SortedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty map ordered by `less_fn`.
    ///
    /// With `None`, the map keeps insertion order: no reordering ever occurs
    /// and bounded queries treat every entry as tied with the bounds.
    ///
    pub fn new(less_fn: Option<LessFn<V>>) -> Self {
        Self::with_capacity(less_fn, 0)
    }

    /// Creates an empty map with preallocated room for `capacity` entries.
    ///
    pub fn with_capacity(less_fn: Option<LessFn<V>>, capacity: usize) -> Self {
        SortedMap {
            index: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
            less_fn: less_fn.unwrap_or(comparator::unsorted::<V>),
        }
    }

    /// Returns the number of entries.
    ///
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if the map holds no entries.
    ///
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Retrieves the value stored under `key`, if any.
    ///
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key)
    }

    /// Checks whether `key` exists in the map.
    ///
    pub fn has(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Exact-match view of the map's entries.
    ///
    /// The view is valid until the next mutation (enforced by the borrow
    /// checker) and carries no ordering information.
    ///
    pub fn map(&self) -> &HashMap<K, V> {
        &self.index
    }

    // Value referenced by the key at `order[i]`.
    //
    // The permutation invariant guarantees the lookup succeeds.
    //
    pub(crate) fn value_at(&self, i: usize) -> &V {
        &self.index[&self.order[i]]
    }
}
