//! Statement analysis pipeline
//!
//! raw rows -> header row -> typed rows -> withdrawals -> UPI merchants -> summary

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::header::locate_header;
use crate::layout::StatementLayout;
use crate::merchant::label_merchants;
use crate::models::{StatementReport, UpiSpend};
use crate::normalize::normalize_transactions;
use crate::sheet::{read_path, RawTable};
use crate::statement::load_rows;
use crate::summary::summarize;

/// Run the pipeline over already-decoded rows
pub fn analyze_table(table: &RawTable, layout: &StatementLayout) -> Result<StatementReport> {
    let header_row = locate_header(table, &layout.header)?;
    let rows = load_rows(table, header_row, &layout.columns)?;

    let transactions = normalize_transactions(&rows);
    debug!(
        "Kept {} of {} rows with narration and withdrawal",
        transactions.len(),
        rows.len()
    );

    let labeled = label_merchants(&transactions);
    debug!("Found {} UPI transactions", labeled.len());

    let upi = summarize(&labeled)?;
    match &upi {
        UpiSpend::Summary(summary) => info!(
            "{} UPI merchants, top {} ({})",
            summary.merchants.len(),
            summary.top_merchant,
            summary.top_amount
        ),
        UpiSpend::NoUpiTransactions => warn!("No UPI transactions found"),
    }

    Ok(StatementReport {
        header_row,
        rows,
        transactions,
        upi,
    })
}

/// Decode a statement file and run the pipeline over it
pub fn analyze_path(path: &Path, layout: &StatementLayout) -> Result<StatementReport> {
    info!("Analyzing {}", path.display());
    let table = read_path(path)?;
    analyze_table(&table, layout)
}
