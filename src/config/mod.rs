//! Configuration loading
//!
//! Reads `buildwatch.toml` from the project root. The configuration file is
//! required - the intentional-no-op path applies to the project descriptor,
//! not to the configuration itself.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use defaults::{
    CONFIG_FILE, DEFAULT_CONFIGURATION, DEFAULT_CONFIGURATION_FLAG, DEFAULT_DEBOUNCE_MS,
    DEFAULT_LOGS_DIR, DEFAULT_NOTIFY_ADDR, DEFAULT_STAMP_FILE,
};

/// Top-level buildwatch configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub project: ProjectSection,
    pub build: BuildSection,
    #[serde(default)]
    pub reload: ReloadSection,
}

/// `[project]` section: the buildable unit
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectSection {
    /// Path to the solution/project descriptor, relative to the project root
    pub descriptor: PathBuf,
}

/// `[build]` section: external build tool and its argument templates
#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
    /// Build configuration name passed through verbatim
    #[serde(default = "default_configuration")]
    pub configuration: String,

    /// Build tool binary, looked up on PATH unless absolute
    pub tool: String,

    /// Arguments for build/rebuild invocations
    #[serde(default)]
    pub build_args: Vec<String>,

    /// Arguments for clean invocations
    #[serde(default)]
    pub clean_args: Vec<String>,

    /// Extra flag appended when a full rebuild is forced
    #[serde(default)]
    pub rebuild_flag: String,

    /// Flag used to pass the configuration name
    #[serde(default = "default_configuration_flag")]
    pub configuration_flag: String,

    /// Directory for per-configuration build logs
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,
}

/// `[reload]` section: hot-reload coordination
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReloadSection {
    /// Address of the running instrumented process
    pub notify_addr: String,

    /// Debounce delay before the reload trigger fires (in milliseconds)
    pub debounce_ms: u64,

    /// Reload hook command and arguments; empty means stamp-only reloads
    pub hook: Vec<String>,

    /// Built artifact watched for staleness, relative to the project root
    pub artifact: Option<PathBuf>,

    /// Stamp recording what the host last loaded
    pub stamp: PathBuf,
}

impl Default for ReloadSection {
    fn default() -> Self {
        Self {
            notify_addr: DEFAULT_NOTIFY_ADDR.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            hook: Vec::new(),
            artifact: None,
            stamp: PathBuf::from(DEFAULT_STAMP_FILE),
        }
    }
}

fn default_configuration() -> String {
    DEFAULT_CONFIGURATION.to_string()
}

fn default_configuration_flag() -> String {
    DEFAULT_CONFIGURATION_FLAG.to_string()
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOGS_DIR)
}

impl Config {
    /// Load `buildwatch.toml` from the project root
    pub fn load(project_dir: &Path) -> Result<Self, ConfigError> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Err(ConfigError::NotFound { path });
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadFile {
            path: path.clone(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse { source })
    }
}
