//! Build orchestration logic
//!
//! Validates that a buildable project exists, invokes the external build
//! tool for a named configuration and action, and reports the outcome.
//! The invoker is injected; the orchestrator itself performs no I/O beyond
//! the descriptor existence check on the supplied [`Project`].

use std::sync::Arc;

use crate::core::action::BuildAction;
use crate::core::project::{BuildConfiguration, Project};

/// External build tool contract
///
/// Build and clean are opaque blocking calls. Failure is a normal `false`
/// result, not an error - retry and timeout policy belong to the tool.
pub trait BuildInvoker: Send + Sync {
    /// Build the project for a configuration; `force_rebuild` requests a
    /// from-scratch rebuild
    fn build(&self, configuration: &BuildConfiguration, force_rebuild: bool) -> bool;

    /// Remove build artifacts for a configuration
    fn clean(&self, configuration: &BuildConfiguration) -> bool;
}

/// Result of a build action
///
/// `Skipped` (no descriptor, nothing to do) is deliberately distinct from
/// `Failure`: only the latter should surface a user-visible failure, and
/// neither may trigger hot-reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// No descriptor found; no invocation took place
    Skipped,
    /// The build tool reported success
    Success,
    /// The build tool reported failure
    Failure,
}

impl BuildOutcome {
    /// Stable identifier for machine-readable output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

/// Build orchestrator
///
/// Owns the injected build invoker and maps actions onto it.
pub struct BuildOrchestrator {
    invoker: Arc<dyn BuildInvoker>,
}

impl BuildOrchestrator {
    /// Create an orchestrator around a build invoker
    pub fn new(invoker: Arc<dyn BuildInvoker>) -> Self {
        Self { invoker }
    }

    /// Execute a build action against a project
    ///
    /// Blocks until the external build tool finishes. An absent descriptor
    /// short-circuits to [`BuildOutcome::Skipped`] without touching the
    /// invoker; otherwise the invoker's boolean result is returned unchanged
    /// as `Success`/`Failure`.
    pub fn execute(
        &self,
        project: &Project,
        configuration: &BuildConfiguration,
        action: BuildAction,
    ) -> BuildOutcome {
        if !project.descriptor_exists() {
            tracing::info!(
                "No project descriptor at '{}', nothing to {}",
                project.descriptor_path().display(),
                action
            );
            return BuildOutcome::Skipped;
        }

        tracing::info!(
            "Running {} for configuration '{}'",
            action,
            configuration
        );

        let ok = match action {
            BuildAction::Build | BuildAction::Rebuild => self
                .invoker
                .build(configuration, action.force_rebuild()),
            BuildAction::Clean => self.invoker.clean(configuration),
        };

        if ok {
            BuildOutcome::Success
        } else {
            BuildOutcome::Failure
        }
    }
}
