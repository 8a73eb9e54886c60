//! Comparator plumbing for sorted maps.
//!
//! A [`SortedMap`](crate::SortedMap) orders its entries by value, using a
//! caller-supplied strict-less-than predicate. This module defines the
//! predicate type and ready-made ascending/descending helpers for any
//! `PartialOrd` value type.
//!
//! # Example
//!
//! ```
//! use urchin_core::{SortedMap, comparator};
//!
//! let mut map: SortedMap<&str, i64> = SortedMap::new(Some(comparator::asc::<i64>));
//! map.insert("b", 2);
//! map.insert("a", 1);
//!
//! let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! ```

/// Strict-less-than predicate over values.
///
/// Must be a consistent strict weak ordering for the map's sortedness
/// invariant to hold. Returning `false` for both argument orders marks the
/// two values as tied; ties keep their insertion order.
///
pub type LessFn<V> = fn(&V, &V) -> bool;

/// Ascending order for any `PartialOrd` value.
///
/// A monomorphized instance coerces to [`LessFn`]:
/// `SortedMap::new(Some(asc::<i64>))`.
///
pub fn asc<V: PartialOrd>(a: &V, b: &V) -> bool {
    a < b
}

/// Descending order for any `PartialOrd` value.
///
pub fn desc<V: PartialOrd>(a: &V, b: &V) -> bool {
    b < a
}

/// Fallback comparator installed when a map is built without one.
///
/// Reports every pair as tied, which degrades the map to insertion-order
/// semantics: binary search always lands at the end, so inserts append, and
/// bounded queries treat every entry as equal to the bound.
///
pub(crate) fn unsorted<V>(_: &V, _: &V) -> bool {
    false
}
