//! Concurrency guard for in-flight submits.

use std::sync::atomic::{AtomicBool, Ordering};

/// Guard that clears the pending flag on drop, ensuring the conversation
/// returns to idle even if the future is cancelled or an early return
/// occurs.
pub(crate) struct PendingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> PendingGuard<'a> {
    /// Attempt to mark a submit as in flight. Returns `None` if another
    /// submit already holds the flag.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
