//! Build-action dispatcher
//!
//! Maps a requested action onto the orchestrator and chains the hot-reload
//! coordinator for Build/Rebuild successes only. Clean's outcome is
//! deliberately fire-and-forget: it is returned for reporting but never
//! gates further action.

use crate::core::action::BuildAction;
use crate::core::coordinator::HotReloadCoordinator;
use crate::core::orchestrator::{BuildOrchestrator, BuildOutcome};
use crate::core::project::{BuildConfiguration, Project};

/// Execute a build action and run the post-build sequence where it applies
///
/// Only a genuine [`BuildOutcome::Success`] for Build or Rebuild reaches the
/// coordinator; skips and failures never do, and Clean never does regardless
/// of its outcome.
pub fn dispatch(
    orchestrator: &BuildOrchestrator,
    coordinator: &HotReloadCoordinator,
    project: &Project,
    configuration: &BuildConfiguration,
    action: BuildAction,
) -> BuildOutcome {
    let outcome = orchestrator.execute(project, configuration, action);

    match action {
        BuildAction::Build | BuildAction::Rebuild => {
            if outcome == BuildOutcome::Success {
                coordinator.on_build_succeeded();
            }
        }
        BuildAction::Clean => {
            if outcome == BuildOutcome::Failure {
                tracing::warn!("Clean failed for configuration '{configuration}'");
            }
        }
    }

    outcome
}
