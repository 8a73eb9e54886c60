//! Channel iteration as an extension of `SortedMap`.

use std::hash::Hash;

use urchin_core::{Record, SortedMap};

use crate::channel_iter::ChannelIter;
use crate::iter_params::IterChParams;

/// Channel-based iteration over a [`SortedMap`].
///
/// The bounded forms resolve their range before any thread is spawned: an
/// empty range is reported synchronously as `None` and costs no producer.
///
/// The producer owns a call-time snapshot of the target range, so the map
/// stays borrowed only for the duration of the call itself; the usual rule
/// still applies that iteration must not race with mutation, and the
/// snapshot makes a later mutation invisible to an in-flight iteration
/// rather than a data race.
///
pub trait SortedMapChannelExt<K, V> {
    /// Delivers every entry in sort order over a rendezvous channel.
    ///
    fn iter_ch(&self) -> ChannelIter<K, V>;

    /// Delivers every entry with custom direction, buffering, and timeout.
    ///
    fn iter_ch_custom(&self, params: IterChParams) -> ChannelIter<K, V>;

    /// Delivers the entries whose values fall within the bounds.
    ///
    /// `None` when no values fall within the bounds.
    ///
    fn iter_between_ch(&self, lower: Option<&V>, upper: Option<&V>) -> Option<ChannelIter<K, V>>;

    /// Bounded delivery with custom direction, buffering, and timeout.
    ///
    fn iter_between_ch_custom(
        &self,
        params: IterChParams,
        lower: Option<&V>,
        upper: Option<&V>,
    ) -> Option<ChannelIter<K, V>>;
}

impl<K, V> SortedMapChannelExt<K, V> for SortedMap<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + 'static,
{
    fn iter_ch(&self) -> ChannelIter<K, V> {
        self.iter_ch_custom(IterChParams::default())
    }

    fn iter_ch_custom(&self, params: IterChParams) -> ChannelIter<K, V> {
        spawn_over(self.iter(), params)
    }

    fn iter_between_ch(&self, lower: Option<&V>, upper: Option<&V>) -> Option<ChannelIter<K, V>> {
        self.iter_between_ch_custom(IterChParams::default(), lower, upper)
    }

    fn iter_between_ch_custom(
        &self,
        params: IterChParams,
        lower: Option<&V>,
        upper: Option<&V>,
    ) -> Option<ChannelIter<K, V>> {
        // Fail fast on an empty range, before any thread exists.
        let (lo, hi) = self.bounds_idx_search(lower, upper)?;

        let range = self.iter().skip(lo).take(hi - lo + 1);
        Some(spawn_over(range, params))
    }
}

// Snapshots the entries and hands them to a producer thread.
//
fn spawn_over<'a, K, V, I>(entries: I, params: IterChParams) -> ChannelIter<K, V>
where
    K: Clone + Send + 'static,
    V: Clone + Send + 'static,
    I: Iterator<Item = (&'a K, &'a V)>,
{
    let mut records: Vec<Record<K, V>> = entries
        .map(|(k, v)| Record {
            key: k.clone(),
            val: v.clone(),
        })
        .collect();

    if params.reversed {
        records.reverse();
    }

    ChannelIter::spawn(records, params)
}
