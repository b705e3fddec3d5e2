//! Output formatting
//!
//! This module provides utilities for configuring verbosity, emitting
//! machine-readable results, and formatting messages to the user.

use std::sync::OnceLock;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

static GLOBAL_OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

/// Global output configuration, applied once at startup
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress all output except errors
    pub quiet: bool,
    /// Emit machine-readable JSON instead of human messages
    pub json: bool,
    /// Verbosity level (-v for info, -vv for debug)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create an output configuration from CLI flags
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Initialize the tracing subscriber according to verbosity
    pub fn init_tracing(&self) {
        let level = if self.quiet {
            tracing::Level::ERROR
        } else {
            match self.verbose {
                0 => tracing::Level::WARN,
                1 => tracing::Level::INFO,
                _ => tracing::Level::DEBUG,
            }
        };

        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
            )
            .init();
    }

    /// Install this configuration as the process-wide default
    pub fn apply_global(self) {
        let _ = GLOBAL_OUTPUT.set(self);
    }

    /// The process-wide output configuration
    pub fn global() -> Self {
        GLOBAL_OUTPUT.get().copied().unwrap_or_default()
    }
}

/// Print a user-facing status line unless quiet mode is active
pub fn status_line(prefix: &str, message: &str) {
    if !OutputConfig::global().quiet {
        println!("{prefix} {message}");
    }
}

/// Display a top-level error with its cause chain
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  Caused by: {cause}");
    }
}
