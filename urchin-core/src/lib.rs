//! In-memory ordered associative container.
//!
//! `urchin-core` provides [`SortedMap`], a map from unique keys to values
//! that stays retrievable in an order defined by a pluggable comparison rule,
//! with point lookups, inclusive bounded range queries, and forward/reverse
//! iteration.
//!
//! Cancellable channel-based iteration lives in the `urchin-channel` crate.

pub mod comparator;
pub mod sorted_map;

pub use comparator::{LessFn, asc, desc};
pub use sorted_map::{Iter, Record, SortedMap};
