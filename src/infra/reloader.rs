//! Reload predicate and host reload hook
//!
//! The predicate compares the built artifact's mtime against a stamp file
//! recording what the host last loaded. The reloader runs the configured
//! hook command and refreshes the stamp on success.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;

use crate::core::coordinator::{HostReloader, ReloadPredicate};

/// Get the modification time of a file
///
/// Returns `None` if the file doesn't exist or mtime cannot be read.
fn mtime(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|m| m.modified()).ok()
}

/// Mtime-based reload detection
///
/// A reload is needed when the artifact exists and is newer than the stamp
/// (or the stamp is missing entirely). Both files are written by tooling,
/// so timestamps are reliable here.
pub struct MtimePredicate {
    artifact: PathBuf,
    stamp: PathBuf,
}

impl MtimePredicate {
    pub fn new(artifact: impl Into<PathBuf>, stamp: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            stamp: stamp.into(),
        }
    }
}

impl ReloadPredicate for MtimePredicate {
    fn is_reload_needed(&self) -> bool {
        let Some(artifact_time) = mtime(&self.artifact) else {
            return false;
        };
        match mtime(&self.stamp) {
            Some(stamp_time) => artifact_time > stamp_time,
            None => true,
        }
    }
}

/// Hook-command host reloader
///
/// Runs the configured command, passing `--hard` for hard reloads, and
/// touches the stamp once the hook reports success. With no hook
/// configured, only the stamp is refreshed.
pub struct HookReloader {
    hook: Vec<String>,
    stamp: PathBuf,
}

impl HookReloader {
    pub fn new(hook: Vec<String>, stamp: impl Into<PathBuf>) -> Self {
        Self {
            hook,
            stamp: stamp.into(),
        }
    }

    fn touch_stamp(&self) {
        if let Some(parent) = self.stamp.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::debug!("Failed to create stamp directory: {e}");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.stamp, b"") {
            tracing::debug!("Failed to touch reload stamp: {e}");
        }
    }
}

impl HostReloader for HookReloader {
    fn reload(&self, hard: bool) {
        let Some((program, args)) = self.hook.split_first() else {
            tracing::debug!("No reload hook configured, refreshing stamp only");
            self.touch_stamp();
            return;
        };

        let mut command = Command::new(program);
        command.args(args);
        if hard {
            command.arg("--hard");
        }

        match command.status() {
            Ok(status) if status.success() => {
                tracing::info!("Reload hook finished");
                self.touch_stamp();
            }
            Ok(status) => tracing::warn!("Reload hook exited with {status}"),
            Err(e) => tracing::warn!("Failed to run reload hook '{program}': {e}"),
        }
    }
}
