//! Batch variants of the single-entry operations.
//!
//! Each batch applies the single-entry operation uniformly and collects the
//! per-entry results. The batch as a whole is not atomic: one entry failing
//! (duplicate insert, absent delete) never aborts the rest.

use std::hash::Hash;

use crate::sorted_map::{Record, SortedMap};

impl<K, V> SortedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts every record, reporting each record's insert status.
    ///
    pub fn batch_insert<I>(&mut self, records: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Record<K, V>>,
    {
        records
            .into_iter()
            .map(|rec| self.insert(rec.key, rec.val))
            .collect()
    }

    /// Deletes every key, reporting each key's delete status.
    ///
    pub fn batch_delete(&mut self, keys: &[K]) -> Vec<bool> {
        keys.iter().map(|key| self.delete(key)).collect()
    }

    /// Stores every record unconditionally.
    ///
    pub fn batch_replace<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record<K, V>>,
    {
        for rec in records {
            self.replace(rec.key, rec.val);
        }
    }

    /// Retrieves the value under each key, in the keys' order.
    ///
    pub fn batch_get(&self, keys: &[K]) -> Vec<Option<&V>> {
        keys.iter().map(|key| self.get(key)).collect()
    }

    /// Checks each key for membership, in the keys' order.
    ///
    pub fn batch_has(&self, keys: &[K]) -> Vec<bool> {
        keys.iter().map(|key| self.has(key)).collect()
    }
}
