//! Project descriptor and build configuration types

use std::fmt;
use std::path::{Path, PathBuf};

/// The buildable unit, identified by its descriptor file
///
/// A project whose descriptor is absent is not an error - every build action
/// becomes an intentional no-op.
#[derive(Debug, Clone)]
pub struct Project {
    /// Path to the solution/project descriptor file
    descriptor_path: PathBuf,
}

impl Project {
    /// Create a project for the given descriptor path
    pub fn new(descriptor_path: impl Into<PathBuf>) -> Self {
        Self {
            descriptor_path: descriptor_path.into(),
        }
    }

    /// Path to the descriptor file
    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    /// Whether a descriptor exists at the configured path
    pub fn descriptor_exists(&self) -> bool {
        self.descriptor_path.exists()
    }
}

/// A named build profile (e.g. "Debug")
///
/// Treated as an opaque key and passed through to the build tool verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfiguration(String);

impl BuildConfiguration {
    /// Create a configuration from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The configuration name as passed to the build tool
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BuildConfiguration {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
