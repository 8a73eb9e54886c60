//! Bounded range resolution over the sorted key sequence.
//!
//! Converts an arbitrary lower/upper value pair into an inclusive index range
//! over `order`. Either bound may be absent, bounds may be inverted, sort
//! values may be duplicated at a boundary, and an equal-bounds query may land
//! in a gap between present values; all of these resolve without error, with
//! `None` standing for the empty range.

use std::hash::Hash;

use crate::sorted_map::SortedMap;

impl<K, V> SortedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Resolves `lower`/`upper` to the inclusive index range `(lo, hi)` over
    /// the sorted sequence covering every entry whose value is not less than
    /// `lower` and not greater than `upper`.
    ///
    /// An absent bound leaves that side unconstrained. Entries tied with a
    /// bound (neither less nor greater under the comparator) are always
    /// included at the respective end.
    ///
    /// Returns `None` — the empty range, a defined outcome rather than an
    /// error — when the map is empty, the bounds are inverted, all entries
    /// fall outside the bounds, or an equal-bounds query lands in a gap.
    ///
    /// # Example
    ///
    /// ```
    /// use urchin_core::{SortedMap, comparator};
    ///
    /// let mut map = SortedMap::new(Some(comparator::asc::<i64>));
    /// for (k, v) in [("a", 10), ("b", 20), ("c", 20), ("d", 30)] {
    ///     map.insert(k, v);
    /// }
    ///
    /// // Both entries tied with the bound are included.
    /// assert_eq!(Some((1, 2)), map.bounds_idx_search(Some(&20), Some(&20)));
    ///
    /// // Inverted bounds match nothing.
    /// assert_eq!(None, map.bounds_idx_search(Some(&30), Some(&10)));
    /// ```
    ///
    pub fn bounds_idx_search(&self, lower: Option<&V>, upper: Option<&V>) -> Option<(usize, usize)> {
        let len = self.order.len();
        if len == 0 {
            return None;
        }

        // Inverted bounds cannot match anything.
        //
        if let (Some(lo), Some(hi)) = (lower, upper)
            && (self.less_fn)(hi, lo)
        {
            return None;
        }

        let mut lo_idx = 0;
        if let Some(bound) = lower {
            // Smallest index whose value is strictly greater than the bound,
            // then step back over the tie cluster so entries equal to the
            // bound are included.
            //
            lo_idx = self.search_above(bound);
            while lo_idx > 0 && !(self.less_fn)(self.value_at(lo_idx - 1), bound) {
                lo_idx -= 1;
            }
        }

        let mut hi_idx = len - 1;
        if let Some(bound) = upper {
            // The same insertion point is one past the last entry that is
            // not greater than the bound.
            //
            let past = self.search_above(bound);
            if past == 0 {
                return None;
            }
            hi_idx = past - 1;
        }

        // Covers bounds beyond the data on either side and equal bounds
        // landing in a gap between present values.
        //
        if lo_idx > hi_idx {
            return None;
        }

        Some((lo_idx, hi_idx))
    }

    /// Sorted view of all keys, valid until the next mutation.
    ///
    pub fn keys(&self) -> &[K] {
        &self.order
    }

    /// Sorted view of the keys whose values fall within the bounds,
    /// valid until the next mutation. `None` on an empty range.
    ///
    pub fn bounded_keys(&self, lower: Option<&V>, upper: Option<&V>) -> Option<&[K]> {
        let (lo, hi) = self.bounds_idx_search(lower, upper)?;
        Some(&self.order[lo..=hi])
    }

    // Smallest index whose value is strictly greater than `bound`; `len()`
    // if no such entry. The predicate is monotonic over the sorted sequence,
    // so binary search is well-defined.
    //
    pub(crate) fn search_above(&self, bound: &V) -> usize {
        self.order
            .partition_point(|key| !(self.less_fn)(bound, &self.index[key]))
    }
}
