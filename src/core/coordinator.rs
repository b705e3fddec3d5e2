//! Hot-reload coordination logic
//!
//! After a successful build or rebuild (never clean, never failure or
//! skip), the coordinator notifies the running instrumented process,
//! restarts the debounce timer, and performs an immediate hard host reload
//! when one is needed. All collaborators are injected at construction.

use std::sync::Arc;

use crate::core::debounce::DebounceTimer;

/// Running instrumented process contract
///
/// Delivery is fire-and-forget: no acknowledgment is awaited, and failure
/// (e.g. no process attached) is ignored at this layer.
pub trait RunningProcessNotifier: Send + Sync {
    /// Tell the running process its scripts changed
    fn notify_scripts_changed(&self);
}

/// Predicate deciding whether the host process must reload its assemblies
///
/// Evaluated fresh after each qualifying build; nothing is cached.
pub trait ReloadPredicate: Send + Sync {
    fn is_reload_needed(&self) -> bool;
}

/// Host process assembly reload contract
pub trait HostReloader: Send + Sync {
    /// Reload loaded assemblies; `hard` discards and fully reconstructs
    /// loaded state instead of patching incrementally
    fn reload(&self, hard: bool);
}

/// Hot-reload coordinator
///
/// Owns the one piece of state that outlives a single build: the debounce
/// timer, created once and restarted (not recreated) on every qualifying
/// success.
pub struct HotReloadCoordinator {
    notifier: Arc<dyn RunningProcessNotifier>,
    timer: Arc<dyn DebounceTimer>,
    predicate: Arc<dyn ReloadPredicate>,
    reloader: Arc<dyn HostReloader>,
}

impl HotReloadCoordinator {
    /// Create a coordinator around its collaborators
    pub fn new(
        notifier: Arc<dyn RunningProcessNotifier>,
        timer: Arc<dyn DebounceTimer>,
        predicate: Arc<dyn ReloadPredicate>,
        reloader: Arc<dyn HostReloader>,
    ) -> Self {
        Self {
            notifier,
            timer,
            predicate,
            reloader,
        }
    }

    /// Run the post-build sequence
    ///
    /// Must be invoked only after a successful Build or Rebuild. The three
    /// steps always run in order; none is skipped based on another's
    /// outcome, and the reload condition is independent of steps 1-2.
    pub fn on_build_succeeded(&self) {
        // 1. Notify the running instrumented process (fire-and-forget)
        self.notifier.notify_scripts_changed();

        // 2. Push the pending reload trigger's deadline forward
        self.timer.restart();

        // 3. Hard-reload host assemblies when needed
        if self.predicate.is_reload_needed() {
            tracing::info!("Assembly reload needed, triggering hard reload");
            self.reloader.reload(true);
        }
    }
}
