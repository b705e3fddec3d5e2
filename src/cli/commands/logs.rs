//! CLI implementation for `buildwatch logs`
//!
//! Prints the per-configuration build logs folder, optionally opening it in
//! the system file manager.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{status, status_line};
use crate::config::Config;
use crate::error::BuildwatchError;

/// Execute the logs command
pub fn execute(project_dir: &Path, open_folder: bool) -> Result<()> {
    let config = Config::load(project_dir).map_err(BuildwatchError::from)?;
    let logs_dir = project_dir.join(&config.build.logs_dir);

    println!("{}", logs_dir.display());

    if open_folder {
        if !logs_dir.exists() {
            status_line(status::WARNING, "Logs folder does not exist yet");
            return Ok(());
        }
        open::that(&logs_dir)
            .with_context(|| format!("Failed to open '{}'", logs_dir.display()))?;
    }

    Ok(())
}
