//! Single-slot debounce timer
//!
//! Coalesces rapid repeated restarts into one eventual fire. The trigger
//! (the host-reload check) runs once the delay elapses without another
//! restart; at most one fire is pending at any time.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Debounce timer contract
///
/// Restart pushes the pending fire's deadline forward instead of scheduling
/// a second parallel fire, and is safe to call repeatedly.
pub trait DebounceTimer: Send + Sync {
    fn restart(&self);
}

/// Tokio-backed debounce timer
///
/// Each restart aborts the pending sleep task (if any) and spawns a fresh
/// one, so only the latest deadline can fire. Must be used from within a
/// tokio runtime.
pub struct TokioDebounce {
    delay: Duration,
    trigger: Arc<dyn Fn() + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl TokioDebounce {
    /// Create a timer that runs `trigger` once `delay` elapses after the
    /// last restart
    pub fn new(delay: Duration, trigger: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self {
            delay,
            trigger,
            pending: Mutex::new(None),
        }
    }

    /// Whether a fire is currently scheduled
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .expect("debounce timer lock poisoned")
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Wait for the pending fire, if any, to complete
    ///
    /// Lets a one-shot caller drain the scheduled reload trigger before
    /// exiting instead of dropping it on the floor.
    pub async fn join_pending(&self) {
        let handle = self
            .pending
            .lock()
            .expect("debounce timer lock poisoned")
            .take();
        if let Some(handle) = handle {
            // Aborted handles surface a JoinError, which is fine here
            let _ = handle.await;
        }
    }
}

impl DebounceTimer for TokioDebounce {
    fn restart(&self) {
        let mut pending = self
            .pending
            .lock()
            .expect("debounce timer lock poisoned");

        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let delay = self.delay;
        let trigger = Arc::clone(&self.trigger);
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trigger();
        }));
    }
}
