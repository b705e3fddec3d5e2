//! Build action variants
//!
//! The three operations a user may request, as a closed enum matched
//! exhaustively everywhere. The only place an invalid action can exist is
//! the [`FromStr`] boundary, where external identifiers are deserialized.

use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

/// A requested build operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildAction {
    /// Incremental build
    Build,
    /// Full rebuild (force flag passed to the build tool)
    Rebuild,
    /// Remove build artifacts; never triggers hot-reload
    Clean,
}

impl BuildAction {
    /// Whether the build tool should be forced to rebuild from scratch
    ///
    /// Build and Rebuild differ only in this flag.
    pub fn force_rebuild(self) -> bool {
        self == Self::Rebuild
    }

    /// Stable identifier, the inverse of [`FromStr`]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Rebuild => "rebuild",
            Self::Clean => "clean",
        }
    }
}

impl fmt::Display for BuildAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildAction {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "build" => Ok(Self::Build),
            "rebuild" => Ok(Self::Rebuild),
            "clean" => Ok(Self::Clean),
            other => Err(DispatchError::UnknownAction {
                action: other.to_string(),
            }),
        }
    }
}
