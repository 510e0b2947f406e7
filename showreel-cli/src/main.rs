//! Showreel CLI - Command-line interface
//!
//! Serves the portfolio site, exports it as static files, or lists the
//! catalog.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use showreel_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "showreel")]
#[command(about = "Single-page portfolio site with lazy video tiles")]
struct Cli {
    /// Console log level (RUST_LOG overrides)
    #[arg(long, global = true, value_enum, default_value_t = CliLogLevel::default())]
    log_level: CliLogLevel,

    /// Directory for a full trace log of this run
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())
        .context("Failed to initialize logging")?;

    commands::handle_command(cli.command).await
}
