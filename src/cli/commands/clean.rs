//! CLI implementation for `buildwatch clean`
//!
//! Clean is fire-and-forget: its outcome is reported but never fails the
//! command and never reaches the hot-reload coordinator.

use std::path::Path;

use anyhow::Result;

use crate::cli::commands::build::{emit_json, wire};
use crate::cli::output::{status, status_line};
use crate::config::Config;
use crate::error::BuildwatchError;
use crate::core::action::BuildAction;
use crate::core::dispatch::dispatch;
use crate::core::orchestrator::BuildOutcome;

/// Execute the clean command
pub async fn execute(project_dir: &Path) -> Result<()> {
    let config = Config::load(project_dir).map_err(BuildwatchError::from)?;
    let wired = wire(project_dir, &config)?;

    let outcome = dispatch(
        &wired.orchestrator,
        &wired.coordinator,
        &wired.project,
        &wired.configuration,
        BuildAction::Clean,
    );

    emit_json(BuildAction::Clean, outcome);

    match outcome {
        BuildOutcome::Skipped => status_line(
            status::INFO,
            &format!(
                "Nothing to clean: no descriptor at {}",
                wired.project.descriptor_path().display()
            ),
        ),
        // Outcome is deliberately discarded; a failed clean is a warning,
        // not a command failure
        BuildOutcome::Success | BuildOutcome::Failure => status_line(
            status::SUCCESS,
            &format!("Clean finished for configuration '{}'", wired.configuration),
        ),
    }

    Ok(())
}
