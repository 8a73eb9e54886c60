//! Tuning knobs for channel iteration.

use std::time::Duration;

/// Options for a channel iteration.
///
/// The default is the strictest delivery: forward order, rendezvous channel
/// (every entry handed off directly to a waiting consumer), no send timeout.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use urchin_channel::IterChParams;
///
/// let params = IterChParams {
///     reversed: true,
///     buf_size: 64,
///     send_timeout: Some(Duration::from_millis(10)),
/// };
/// assert!(params.reversed);
/// ```
///
#[derive(Clone, Copy, Debug, Default)]
pub struct IterChParams {
    /// Deliver in the exact reverse of sort order.
    pub reversed: bool,

    /// Channel capacity; 0 is a rendezvous channel.
    pub buf_size: usize,

    /// Longest the producer waits for the consumer to accept one entry.
    /// Elapsing aborts the whole iteration; it never skips an entry and
    /// continues. `None` waits indefinitely.
    pub send_timeout: Option<Duration>,
}
