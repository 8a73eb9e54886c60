//! Cancellation signal shared between a channel iteration's consumer handle
//! and its producer thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Idempotent, non-blocking cancellation signal.
///
/// A single atomic flag: setting it never blocks, never allocates, and has
/// at-most-once effect no matter how many times (or from how many clones)
/// [`cancel`](Self::cancel) is invoked. The producer polls the flag before
/// each unit of work; nothing ever waits on it.
///
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Safe to call any number of times, or never.
    ///
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Checks the signal without blocking.
    ///
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
