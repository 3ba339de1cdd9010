//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sift - See where your UPI money goes
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "UPI merchant spend from bank statement spreadsheets", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Statement layout file (header tokens and column names)
    ///
    /// Defaults to ~/.local/share/sift/layout.toml if present, otherwise
    /// the built-in HDFC layout.
    #[arg(long, global = true)]
    pub layout: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize UPI spending per merchant
    Analyze {
        /// Statement file (.xlsx, .xls, .ods or .csv)
        #[arg(short, long)]
        file: PathBuf,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,

        /// Output file for json/csv (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the normalized transactions instead of the merchant summary (CSV)
        #[arg(long)]
        transactions: bool,

        /// Show only the top N merchants in the table
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show which row was detected as the statement header
    Header {
        /// Statement file (.xlsx, .xls, .ods or .csv)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show the statement layout in effect
    Layout,
}
