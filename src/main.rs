//! Buildwatch CLI - Build orchestration and hot-reload coordination
//!
//! Entry point for the buildwatch command-line application.

use anyhow::Result;
use clap::Parser;

use buildwatch::cli::output::{display_error, OutputConfig};
use buildwatch::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Apply output configuration globally and initialize tracing
    let output_config = OutputConfig::new(cli.quiet, cli.json, cli.verbose);
    output_config.init_tracing();
    output_config.apply_global();

    // Run the command and handle errors
    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
