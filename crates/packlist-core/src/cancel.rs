//! Cooperative cancellation for long-running scans.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Single-shot, non-blocking cancellation check.
///
/// The walker polls this at the top of every per-entry step; once it
/// reports cancelled, the walk returns whatever partial results have
/// accumulated. Cancellation is not an error.
pub trait Cancellable {
    /// Check whether cancellation has been requested.
    fn is_cancelled(&self) -> bool;

    /// Request cancellation.
    fn cancel(&self);
}

/// Default cancellation token over an `Arc<AtomicBool>`.
///
/// Clones share the same flag, so a caller can keep one handle and hand
/// another to the scan (e.g. fire it from an external timer thread).
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
