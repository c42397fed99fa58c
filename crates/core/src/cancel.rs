//! Cooperative cancellation for packing runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Shared cancellation signal.
///
/// Cloning the token yields another handle to the same signal, so a
/// caller can keep one handle and hand the other to a packing run.
/// Cancellation is cooperative: solvers poll the token between work
/// units and wind down once it fires. Timeouts are expressed as
/// cancellation via [`CancelToken::cancel_after`].
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a new, unfired token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the signal. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Returns true once the signal has fired.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Fires the signal after `delay` from a background thread.
    pub fn cancel_after(&self, delay: Duration) {
        let token = self.clone();
        thread::spawn(move || {
            thread::sleep(delay);
            token.cancel();
        });
    }
}
