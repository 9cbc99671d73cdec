//! Cooperative interrupt signaling.
//!
//! Host environments with asynchronous cancellation (a scripting REPL, a
//! signal handler thread) raise a process-wide flag via [`request_interrupt`].
//! The flag is polled at event dispatch checkpoints; the native loop never
//! preempts a running handler.
//!
//! The dispatch checkpoint owns clearing: the flag is consumed exactly when a
//! dispatch observes it and raises [`VizError::Interrupted`]. Hosts that want
//! to withdraw a request before it is observed can call [`clear_interrupt`].
//!
//! [`VizError::Interrupted`]: crate::error::VizError::Interrupted

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPT_PENDING: AtomicBool = AtomicBool::new(false);

/// Raises the process-wide interrupt flag.
///
/// Safe to call from any thread, including signal-handling contexts.
pub fn request_interrupt() {
    INTERRUPT_PENDING.store(true, Ordering::SeqCst);
}

/// Polls the interrupt flag without consuming it.
#[must_use]
pub fn interrupt_pending() -> bool {
    INTERRUPT_PENDING.load(Ordering::SeqCst)
}

/// Consumes the interrupt flag, returning whether it was set.
///
/// Called at each dispatch checkpoint so that one request surfaces as exactly
/// one `Interrupted` error.
pub fn take_interrupt() -> bool {
    INTERRUPT_PENDING.swap(false, Ordering::SeqCst)
}

/// Clears the interrupt flag without observing it.
pub fn clear_interrupt() {
    INTERRUPT_PENDING.store(false, Ordering::SeqCst);
}

/// Serializes tests that touch the process-wide flag.
#[cfg(test)]
pub(crate) fn test_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_flag_lifecycle() {
        let _guard = test_guard();
        clear_interrupt();
        assert!(!interrupt_pending());

        request_interrupt();
        assert!(interrupt_pending());
        // Non-consuming poll leaves the flag up.
        assert!(interrupt_pending());

        assert!(take_interrupt());
        assert!(!interrupt_pending());
        // Consumed: a second take sees nothing.
        assert!(!take_interrupt());

        request_interrupt();
        clear_interrupt();
        assert!(!take_interrupt());
    }
}
