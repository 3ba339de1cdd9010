//! Sift CLI - UPI merchant spend from bank statements
//!
//! Usage:
//!   sift analyze --file statement.xlsx    Summarize UPI spend per merchant
//!   sift header --file statement.xlsx     Show the detected header row
//!   sift layout                           Show the statement layout in effect

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so json/csv on stdout stay clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    match cli.command {
        Commands::Analyze {
            file,
            format,
            output,
            transactions,
            limit,
        } => commands::cmd_analyze(
            &file,
            cli.layout.as_deref(),
            &format,
            output.as_deref(),
            transactions,
            limit,
        ),
        Commands::Header { file } => commands::cmd_header(&file, cli.layout.as_deref()),
        Commands::Layout => commands::cmd_layout(cli.layout.as_deref()),
    }
}
