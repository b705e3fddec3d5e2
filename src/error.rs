//! Error types for buildwatch
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("No buildwatch.toml found at '{path}'. Create one to describe the project.")]
    NotFound { path: PathBuf },

    /// IO error while reading configuration
    #[error("Failed to read configuration '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Configuration parse error
    #[error("Failed to parse buildwatch.toml: {source}")]
    Parse { source: toml::de::Error },
}

/// Dispatch errors
///
/// Raised at the single deserialization boundary where an external action
/// identifier is turned into a [`crate::core::action::BuildAction`]. An
/// unknown identifier is an input-contract violation, never a silent no-op.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// Unknown build action identifier
    #[error("Unknown build action '{action}' (expected one of: build, rebuild, clean)")]
    UnknownAction { action: String },
}

/// Build invoker errors
///
/// These surface at wiring time; once an invoker is constructed, build and
/// clean failures are reported as a plain boolean outcome, not as errors.
#[derive(Error, Debug)]
pub enum InvokerError {
    /// Build tool not found on PATH
    #[error("Build tool '{tool}' not found on PATH")]
    ToolNotFound { tool: String },

    /// Build tool command template is empty
    #[error("Build tool is not configured (set [build] tool in buildwatch.toml)")]
    ToolNotConfigured,
}

/// Top-level buildwatch error type
#[derive(Error, Debug)]
pub enum BuildwatchError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dispatch error
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Invoker error
    #[error("Invoker error: {0}")]
    Invoker(#[from] InvokerError),

    /// IO error
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Generic error
    #[error("{0}")]
    Generic(String),
}
