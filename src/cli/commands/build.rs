//! CLI implementation for `buildwatch build` and `buildwatch rebuild`
//!
//! Wires the orchestrator and coordinator from configuration, dispatches
//! the requested action, and drains the debounce timer before exiting so a
//! scheduled reload trigger is not dropped on the floor.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};

use crate::cli::output::{status, status_line, OutputConfig};
use crate::config::Config;
use crate::error::BuildwatchError;
use crate::core::action::BuildAction;
use crate::core::coordinator::{HostReloader, HotReloadCoordinator, ReloadPredicate};
use crate::core::debounce::{DebounceTimer, TokioDebounce};
use crate::core::dispatch::dispatch;
use crate::core::orchestrator::{BuildOrchestrator, BuildOutcome};
use crate::core::project::{BuildConfiguration, Project};
use crate::infra::invoker::ProcessBuildInvoker;
use crate::infra::notifier::TcpNotifier;
use crate::infra::reloader::{HookReloader, MtimePredicate};

/// Everything needed to dispatch one build request
pub(crate) struct Wired {
    pub project: Project,
    pub configuration: BuildConfiguration,
    pub orchestrator: BuildOrchestrator,
    pub coordinator: HotReloadCoordinator,
    pub timer: Arc<TokioDebounce>,
}

/// Construct the collaborators from configuration
pub(crate) fn wire(project_dir: &Path, config: &Config) -> Result<Wired> {
    let project = Project::new(project_dir.join(&config.project.descriptor));
    let configuration = BuildConfiguration::new(config.build.configuration.clone());

    let invoker =
        ProcessBuildInvoker::from_config(project_dir, &config.build).map_err(BuildwatchError::from)?;
    let orchestrator = BuildOrchestrator::new(Arc::new(invoker));

    let stamp = project_dir.join(&config.reload.stamp);
    let artifact = config
        .reload
        .artifact
        .as_ref()
        .map_or_else(|| project.descriptor_path().to_path_buf(), |a| project_dir.join(a));

    let predicate: Arc<dyn ReloadPredicate> = Arc::new(MtimePredicate::new(artifact, &stamp));
    let reloader: Arc<dyn HostReloader> =
        Arc::new(HookReloader::new(config.reload.hook.clone(), &stamp));

    // The timer fires the same reload check the coordinator performs
    // synchronously, just debounced
    let trigger_predicate = Arc::clone(&predicate);
    let trigger_reloader = Arc::clone(&reloader);
    let timer = Arc::new(TokioDebounce::new(
        Duration::from_millis(config.reload.debounce_ms),
        Arc::new(move || {
            if trigger_predicate.is_reload_needed() {
                trigger_reloader.reload(true);
            }
        }),
    ));

    let coordinator = HotReloadCoordinator::new(
        Arc::new(TcpNotifier::new(config.reload.notify_addr.clone())),
        Arc::clone(&timer) as Arc<dyn DebounceTimer>,
        predicate,
        reloader,
    );

    Ok(Wired {
        project,
        configuration,
        orchestrator,
        coordinator,
        timer,
    })
}

/// Print the outcome as JSON when `--json` was given
pub(crate) fn emit_json(action: BuildAction, outcome: BuildOutcome) {
    if OutputConfig::global().json {
        println!(
            "{}",
            serde_json::json!({
                "action": action.as_str(),
                "outcome": outcome.as_str(),
            })
        );
    }
}

/// Execute the build or rebuild command
pub async fn execute(project_dir: &Path, action: BuildAction) -> Result<()> {
    let config = Config::load(project_dir).map_err(BuildwatchError::from)?;
    let wired = wire(project_dir, &config)?;

    let outcome = dispatch(
        &wired.orchestrator,
        &wired.coordinator,
        &wired.project,
        &wired.configuration,
        action,
    );

    emit_json(action, outcome);

    match outcome {
        BuildOutcome::Skipped => {
            status_line(
                status::INFO,
                &format!(
                    "Nothing to {action}: no descriptor at {}",
                    wired.project.descriptor_path().display()
                ),
            );
        }
        BuildOutcome::Success => {
            // Let the debounced reload trigger run before this process exits
            wired.timer.join_pending().await;
            status_line(
                status::SUCCESS,
                &format!("{action} succeeded for configuration '{}'", wired.configuration),
            );
        }
        BuildOutcome::Failure => {
            bail!(
                "{action} failed for configuration '{}'",
                wired.configuration
            );
        }
    }

    Ok(())
}
