//! Statement analysis command implementation

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};
use sift_core::{
    analyze_path,
    export::{write_summary_csv, write_transactions_csv},
    MerchantSummary, NormalizedTransaction, StatementReport, UpiSpend,
};

use super::{format_amount, load_layout, truncate};

/// Output formats for `sift analyze`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!(
                "Unknown format: {}. Available: table, json, csv",
                s
            )),
        }
    }
}

pub fn cmd_analyze(
    file: &Path,
    layout_path: Option<&Path>,
    format: &str,
    output: Option<&Path>,
    show_transactions: bool,
    limit: Option<usize>,
) -> Result<()> {
    let format: OutputFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let (layout, _) = load_layout(layout_path)?;

    let report = analyze_path(file, &layout)
        .with_context(|| format!("Failed to process statement: {}", file.display()))?;

    match output {
        Some(path) => {
            let mut out = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            render(&report, format, show_transactions, limit, &mut out)?;
            info!("Wrote report to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            render(&report, format, show_transactions, limit, &mut stdout.lock())?;
        }
    }

    Ok(())
}

/// Render a report in the requested format
///
/// The table view always carries the normalized transactions. CSV carries a
/// single table: the transactions when `show_transactions` is set or there
/// are no UPI payments, otherwise the merchant summary.
pub fn render<W: Write>(
    report: &StatementReport,
    format: OutputFormat,
    show_transactions: bool,
    limit: Option<usize>,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(report, limit, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => {
            match report.upi.summary() {
                Some(summary) if !show_transactions => write_summary_csv(summary, &mut *out)?,
                Some(_) => write_transactions_csv(&report.transactions, &mut *out)?,
                None => {
                    warn!("No UPI transactions found, writing the transaction table");
                    write_transactions_csv(&report.transactions, &mut *out)?;
                }
            }
            Ok(())
        }
    }
}

fn render_table<W: Write>(
    report: &StatementReport,
    limit: Option<usize>,
    out: &mut W,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "📋 Statement")?;
    writeln!(out, "   Header row: {}", report.header_row)?;
    writeln!(out, "   Rows: {}", report.rows.len())?;
    writeln!(out, "   Withdrawals: {}", report.transactions.len())?;

    render_transactions(&report.transactions, out)?;

    match &report.upi {
        UpiSpend::NoUpiTransactions => {
            writeln!(out)?;
            writeln!(out, "⚠️  No UPI transactions found.")?;
        }
        UpiSpend::Summary(summary) => render_summary(summary, limit, out)?,
    }

    Ok(())
}

fn render_transactions<W: Write>(transactions: &[NormalizedTransaction], out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "   {:10} │ {:50} │ {:>14}", "Date", "Narration", "Withdrawal")?;
    writeln!(
        out,
        "   ───────────┼────────────────────────────────────────────────────┼───────────────"
    )?;
    for tx in transactions {
        let date = tx.date.map(|d| d.to_string()).unwrap_or_default();
        writeln!(
            out,
            "   {:10} │ {:50} │ {:>14}",
            date,
            truncate(&tx.narration, 50),
            format_amount(tx.withdrawal)
        )?;
    }
    Ok(())
}

fn render_summary<W: Write>(
    summary: &MerchantSummary,
    limit: Option<usize>,
    out: &mut W,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "🏆 Top UPI Spending")?;
    writeln!(out, "   Most spent on UPI merchant: {}", summary.top_merchant)?;
    writeln!(out, "   Total amount spent: {}", format_amount(summary.top_amount))?;

    writeln!(out)?;
    writeln!(out, "🏪 UPI spending by merchant")?;
    writeln!(
        out,
        "   {:3} │ {:30} │ {:>14} │ {:>5}",
        "#", "Merchant", "Total Spent", "Count"
    )?;
    writeln!(
        out,
        "   ────┼────────────────────────────────┼────────────────┼───────"
    )?;

    let shown = limit.unwrap_or(summary.merchants.len());
    for (i, m) in summary.merchants.iter().take(shown).enumerate() {
        writeln!(
            out,
            "   {:>3} │ {:30} │ {:>14} │ {:>5}",
            i + 1,
            truncate(&m.merchant, 30),
            format_amount(m.total),
            m.transactions
        )?;
    }
    if shown < summary.merchants.len() {
        writeln!(
            out,
            "   ... {} more merchants",
            summary.merchants.len() - shown
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "🧾 Total UPI Spend (All Merchants): {}",
        format_amount(summary.grand_total)
    )?;

    Ok(())
}
