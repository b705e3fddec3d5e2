//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod clean;
pub mod logs;

use anyhow::Result;
use clap::Subcommand;

use crate::core::action::BuildAction;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the project
    Build,

    /// Force a full rebuild of the project
    Rebuild,

    /// Remove build artifacts
    Clean,

    /// Show the build logs folder
    Logs {
        /// Open the folder in the system file manager
        #[arg(long)]
        open: bool,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        match self {
            Self::Build => build::execute(&current_dir, BuildAction::Build).await,
            Self::Rebuild => build::execute(&current_dir, BuildAction::Rebuild).await,
            Self::Clean => clean::execute(&current_dir).await,
            Self::Logs { open } => logs::execute(&current_dir, open),
        }
    }
}
