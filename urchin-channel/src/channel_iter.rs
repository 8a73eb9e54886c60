//! Channel-backed iteration with explicit cancellation and send timeouts.
//!
//! One background producer thread per iteration walks a snapshot of the
//! target range and hands entries to the consumer over a bounded crossbeam
//! channel:
//!
//! ```text
//! Consumer                         Producer thread
//!    ChannelIter::next() ◄─────────── Sender::send / send_timeout
//!    ChannelIter::cancel() ─────────► CancelToken (polled before each send)
//!    ChannelIter::state() ◄─────────► AtomicCell<IterState>
//! ```
//!
//! State machine: `Idle → Delivering → {Completed, Cancelled, TimedOut}`.
//! Every terminal transition is followed by exactly one channel closure (the
//! producer drops its only `Sender` on exit), so consumers reliably detect
//! the end of delivery — and then consult [`ChannelIter::state`] to learn
//! which terminal it was. Closure alone never means "all data delivered".

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::atomic::AtomicCell;
use crossbeam::channel::{self, Receiver, SendTimeoutError, Sender};
use std::sync::Arc;

use urchin_core::Record;

use crate::cancel_token::CancelToken;
use crate::iter_params::IterChParams;

/// Phase of a channel iteration, readable at any time from the handle.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterState {
    /// Producer spawned but not yet scheduled.
    Idle,
    /// Producer is walking the range.
    Delivering,
    /// Every entry in the range was delivered.
    Completed,
    /// Consumer cancelled (or abandoned) the iteration early. Not an error.
    Cancelled,
    /// A send timeout elapsed before the consumer accepted an entry.
    TimedOut,
}

/// Consumer handle for a channel iteration.
///
/// Yields [`Record`]s in the range's order (or its exact reverse) via
/// [`Iterator`]. Dropping the handle cancels the iteration, disconnects the
/// channel, and joins the producer thread, so abandoning iteration midway
/// leaks nothing.
///
/// # Example
///
/// ```
/// use urchin_core::{SortedMap, asc};
/// use urchin_channel::{IterState, SortedMapChannelExt};
///
/// let mut map = SortedMap::new(Some(asc::<i64>));
/// map.insert("b", 2);
/// map.insert("a", 1);
///
/// let mut iter = map.iter_ch();
/// let keys: Vec<_> = iter.by_ref().map(|rec| rec.key).collect();
///
/// assert_eq!(keys, vec!["a", "b"]);
/// assert_eq!(IterState::Completed, iter.state());
/// ```
///
pub struct ChannelIter<K, V> {
    receiver: Option<Receiver<Record<K, V>>>,
    producer: Option<JoinHandle<()>>,
    token: CancelToken,
    state: Arc<AtomicCell<IterState>>,
}

impl<K, V> ChannelIter<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    /// Starts a producer thread delivering `records` in the given order.
    ///
    /// The records are the call-time snapshot of the target range; delivery
    /// never reorders or skips within it.
    ///
    pub(crate) fn spawn(records: Vec<Record<K, V>>, params: IterChParams) -> Self {
        let (sender, receiver) = channel::bounded(params.buf_size);
        let token = CancelToken::new();
        let state = Arc::new(AtomicCell::new(IterState::Idle));

        let producer = {
            let token = token.clone();
            let state = Arc::clone(&state);
            let send_timeout = params.send_timeout;
            thread::spawn(move || deliver(records, sender, token, state, send_timeout))
        };

        ChannelIter {
            receiver: Some(receiver),
            producer: Some(producer),
            token,
            state,
        }
    }

    /// Requests early termination.
    ///
    /// Idempotent and non-blocking; the producer observes the signal before
    /// its next send, transitions to [`IterState::Cancelled`], and closes the
    /// channel. After calling this, [`next`](Iterator::next) yields nothing
    /// further, including entries still buffered in the channel.
    ///
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Current phase of the iteration.
    ///
    /// Only meaningful as a terminal verdict once the channel has closed
    /// (`next` returned `None`): [`IterState::Completed`] is the sole state
    /// in which every entry of the range was delivered.
    ///
    pub fn state(&self) -> IterState {
        self.state.load()
    }
}

impl<K, V> Iterator for ChannelIter<K, V>
where
    K: Send + 'static,
    V: Send + 'static,
{
    type Item = Record<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        // Entries already buffered are not observable past cancellation.
        if self.token.is_cancelled() {
            return None;
        }
        self.receiver.as_ref()?.recv().ok()
    }
}

impl<K, V> Drop for ChannelIter<K, V> {
    fn drop(&mut self) {
        self.token.cancel();

        // Disconnect first: a producer blocked in send() returns with a
        // disconnect error once the receiver is gone, so the join below
        // cannot wait on a send that nobody will accept.
        self.receiver.take();

        if let Some(producer) = self.producer.take() {
            let _ = producer.join();
        }
    }
}

// Producer loop. Runs on the background thread; owns the only Sender, so
// returning from here closes the channel exactly once in every terminal
// state.
//
fn deliver<K, V>(
    records: Vec<Record<K, V>>,
    sender: Sender<Record<K, V>>,
    token: CancelToken,
    state: Arc<AtomicCell<IterState>>,
    send_timeout: Option<Duration>,
) {
    state.store(IterState::Delivering);

    for record in records {
        if token.is_cancelled() {
            state.store(IterState::Cancelled);
            return;
        }

        match send_timeout {
            Some(window) => match sender.send_timeout(record, window) {
                Ok(()) => {}
                Err(SendTimeoutError::Timeout(_)) => {
                    // Terminal abort: no retry, no skipping ahead.
                    state.store(IterState::TimedOut);
                    return;
                }
                Err(SendTimeoutError::Disconnected(_)) => {
                    state.store(IterState::Cancelled);
                    return;
                }
            },
            None => {
                // A send can only fail by disconnection, which means the
                // consumer dropped the handle.
                if sender.send(record).is_err() {
                    state.store(IterState::Cancelled);
                    return;
                }
            }
        }
    }

    state.store(IterState::Completed);
}
