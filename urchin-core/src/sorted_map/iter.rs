//! Synchronous iteration over the sorted sequence.
//!
//! Two surfaces over the same index ranges:
//!
//! - [`Iter`], a borrowing `Iterator` over `(&K, &V)` that walks the whole
//!   map ([`SortedMap::iter`]) or a bound-restricted slice of it
//!   ([`SortedMap::range`]), forward or — via `rev()` — in exact reverse.
//! - The callback protocol ([`SortedMap::iter_func`],
//!   [`SortedMap::iter_between_func`]), where the callback's boolean return
//!   decides whether to continue.
//!
//! Neither involves concurrency; both are plain sequential walks.

use std::hash::Hash;
use std::iter::FusedIterator;

use crate::sorted_map::SortedMap;

impl<K, V> SortedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Iterates over all entries in sort order.
    ///
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            map: self,
            front: 0,
            back: self.order.len(),
        }
    }

    /// Iterates over the entries whose values fall within the bounds.
    ///
    /// An empty range yields an iterator that produces nothing.
    ///
    /// # Example
    ///
    /// ```
    /// use urchin_core::{SortedMap, comparator};
    ///
    /// let mut map = SortedMap::new(Some(comparator::asc::<i64>));
    /// for (k, v) in [("a", 10), ("b", 20), ("c", 30)] {
    ///     map.insert(k, v);
    /// }
    ///
    /// let picked: Vec<_> = map.range(Some(&15), Some(&30)).map(|(k, _)| *k).collect();
    /// assert_eq!(picked, vec!["b", "c"]);
    /// ```
    ///
    pub fn range(&self, lower: Option<&V>, upper: Option<&V>) -> Iter<'_, K, V> {
        match self.bounds_idx_search(lower, upper) {
            Some((lo, hi)) => Iter {
                map: self,
                front: lo,
                back: hi + 1,
            },
            None => Iter {
                map: self,
                front: 0,
                back: 0,
            },
        }
    }

    /// Passes every entry to `f`, in sort order or its exact reverse.
    ///
    /// Returning false from the callback stops the walk early.
    ///
    pub fn iter_func<F>(&self, reversed: bool, f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        if self.order.is_empty() {
            return;
        }
        self.walk(0, self.order.len() - 1, reversed, f);
    }

    /// Passes the entries whose values fall within the bounds to `f`, in
    /// sort order or its exact reverse.
    ///
    /// An empty range invokes the callback zero times.
    ///
    pub fn iter_between_func<F>(&self, reversed: bool, lower: Option<&V>, upper: Option<&V>, f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        if let Some((lo, hi)) = self.bounds_idx_search(lower, upper) {
            self.walk(lo, hi, reversed, f);
        }
    }

    // Walks the inclusive index range, forward or reversed, until the
    // callback declines to continue.
    //
    fn walk<F>(&self, lo: usize, hi: usize, reversed: bool, mut f: F)
    where
        F: FnMut(&K, &V) -> bool,
    {
        if reversed {
            for i in (lo..=hi).rev() {
                if !f(&self.order[i], self.value_at(i)) {
                    break;
                }
            }
        } else {
            for i in lo..=hi {
                if !f(&self.order[i], self.value_at(i)) {
                    break;
                }
            }
        }
    }
}

/// Borrowing iterator over a sorted map's entries.
///
/// Walks an inclusive index range of the sorted sequence; supports
/// double-ended, exact-size, and fused iteration.
///
pub struct Iter<'a, K, V> {
    map: &'a SortedMap<K, V>,
    front: usize,
    back: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        let key = &self.map.order[self.front];
        self.front += 1;
        Some((key, &self.map.index[key]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V>
where
    K: Eq + Hash + Clone,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }

        self.back -= 1;
        let key = &self.map.order[self.back];
        Some((key, &self.map.index[key]))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> where K: Eq + Hash + Clone {}

#[cfg(test)]
mod tests {
    use crate::comparator;
    use crate::sorted_map::SortedMap;

    fn numbered_map() -> SortedMap<&'static str, i64> {
        let mut map = SortedMap::new(Some(comparator::asc::<i64>));
        for (k, v) in [("b", 2), ("a", 1), ("d", 4), ("c", 3)] {
            assert!(map.insert(k, v));
        }
        map
    }

    #[test]
    fn verify_forward_and_reverse_symmetry() {
        let map = numbered_map();

        let forward: Vec<_> = map.iter().map(|(k, _)| *k).collect();
        let mut reversed: Vec<_> = map.iter().rev().map(|(k, _)| *k).collect();
        reversed.reverse();

        assert_eq!(vec!["a", "b", "c", "d"], forward);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn verify_range_iterator() {
        let map = numbered_map();

        let picked: Vec<_> = map.range(Some(&2), Some(&3)).map(|(k, _)| *k).collect();
        assert_eq!(vec!["b", "c"], picked);

        // Empty range yields nothing.
        assert_eq!(0, map.range(Some(&9), Some(&1)).count());
        assert_eq!(0, map.range(Some(&10), Some(&20)).count());
    }

    #[test]
    fn verify_exact_size_and_fused() {
        let map = numbered_map();

        let mut iter = map.iter();
        assert_eq!(4, iter.len());
        assert_eq!((4, Some(4)), iter.size_hint());

        iter.next();
        iter.next_back();
        assert_eq!(2, iter.len());

        iter.next();
        iter.next();
        assert_eq!(None, iter.next());
        assert_eq!(None, iter.next()); // Stays exhausted.
    }

    #[test]
    fn verify_iter_func_early_stop() {
        let map = numbered_map();

        let mut seen = Vec::new();
        map.iter_func(false, |k, _| {
            seen.push(*k);
            seen.len() < 2
        });
        assert_eq!(vec!["a", "b"], seen);
    }

    #[test]
    fn verify_iter_func_reversed_visits_every_entry() {
        let map = numbered_map();

        let mut seen = Vec::new();
        map.iter_func(true, |k, _| {
            seen.push(*k);
            true
        });
        assert_eq!(vec!["d", "c", "b", "a"], seen);
    }

    #[test]
    fn verify_iter_func_empty_map() {
        let map: SortedMap<&str, i64> = SortedMap::new(Some(comparator::asc::<i64>));

        let mut calls = 0;
        map.iter_func(false, |_, _| {
            calls += 1;
            true
        });
        assert_eq!(0, calls);
    }

    #[test]
    fn verify_iter_between_func() {
        let map = numbered_map();

        let mut seen = Vec::new();
        map.iter_between_func(true, Some(&2), Some(&4), |k, _| {
            seen.push(*k);
            true
        });
        assert_eq!(vec!["d", "c", "b"], seen);

        // Empty range: zero invocations.
        let mut calls = 0;
        map.iter_between_func(false, Some(&9), Some(&1), |_, _| {
            calls += 1;
            true
        });
        assert_eq!(0, calls);
    }
}
