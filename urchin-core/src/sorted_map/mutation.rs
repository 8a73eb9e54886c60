//! Insert, delete, and replace.
//!
//! All three position keys within `order` using the same monotonic binary
//! search as the bounds resolution, so the sortedness and permutation
//! invariants hold across any mutation sequence. Searches cost O(log n) and
//! splicing the key sequence costs O(n).

use std::hash::Hash;

use crate::sorted_map::SortedMap;

impl<K, V> SortedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts `val` under `key`, keeping the key sequence sorted.
    ///
    /// Returns false without mutating anything if the key is already
    /// present; use [`replace`](Self::replace) to overwrite.
    ///
    pub fn insert(&mut self, key: K, val: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }

        let at = self.search_above(&val);
        self.index.insert(key.clone(), val);
        self.order.insert(at, key);
        true
    }

    /// Removes the entry stored under `key`.
    ///
    /// Returns false without mutating anything if the key is absent. When
    /// several keys share an equal sort value, only the targeted key is
    /// removed and the relative order of the others is preserved.
    ///
    pub fn delete(&mut self, key: &K) -> bool {
        let Some(slot) = self.index.get(key).and_then(|val| self.slot_of(key, val)) else {
            return false;
        };

        self.order.remove(slot);
        self.index.remove(key);
        true
    }

    /// Stores `val` under `key` unconditionally, repositioning the key if
    /// the new value sorts differently. Always succeeds.
    ///
    pub fn replace(&mut self, key: K, val: V) {
        self.delete(&key);

        let inserted = self.insert(key, val);
        debug_assert!(inserted);
    }

    // Exact slot in `order` holding `key`, whose current value is `val`.
    //
    // The binary search alone cannot disambiguate keys with tied values, so
    // scan backward from the insertion point: every entry equal to `val`
    // sits contiguously and directly below it.
    //
    fn slot_of(&self, key: &K, val: &V) -> Option<usize> {
        let mut i = self.search_above(val);
        while i > 0 {
            i -= 1;
            if self.order[i] == *key {
                return Some(i);
            }
            if (self.less_fn)(self.value_at(i), val) {
                // Left the tie cluster without finding the key.
                break;
            }
        }
        None
    }
}
