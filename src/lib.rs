//! Image Gallery
//!
//! Entry point shared by the `gallery` binary and its tests.

use clap::Parser;
use gallery_cli::Cli;

/// Parse the command line and run one command to completion.
pub async fn run() -> anyhow::Result<()> {
    run_with(Cli::parse()).await
}

pub async fn run_with(cli: Cli) -> anyhow::Result<()> {
    gallery_cli::run_app(cli).await
}
