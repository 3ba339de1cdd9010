//! Domain models for Sift

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// A statement row read through the resolved header
///
/// Every field is optional: the loader fills what the header row names and
/// what the cell holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatementRow {
    pub date: Option<NaiveDate>,
    pub narration: Option<String>,
    pub reference: Option<String>,
    pub value_date: Option<NaiveDate>,
    pub withdrawal: Option<Decimal>,
    pub deposit: Option<Decimal>,
    pub closing_balance: Option<Decimal>,
}

/// A withdrawal row with normalized narration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedTransaction {
    pub date: Option<NaiveDate>,
    /// Upper-cased and trimmed
    pub narration: String,
    pub withdrawal: Decimal,
}

/// A normalized transaction paid over UPI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantTransaction {
    #[serde(flatten)]
    pub transaction: NormalizedTransaction,
    pub upi_merchant: String,
}

/// Total withdrawals for one merchant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantTotal {
    pub merchant: String,
    pub total: Decimal,
    /// Number of transactions summed into `total`
    pub transactions: usize,
}

/// Per-merchant UPI spend, highest total first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MerchantSummary {
    pub top_merchant: String,
    pub top_amount: Decimal,
    pub merchants: Vec<MerchantTotal>,
    pub grand_total: Decimal,
}

/// Outcome of the UPI stage
///
/// A statement without UPI rows is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpiSpend {
    Summary(MerchantSummary),
    NoUpiTransactions,
}

impl UpiSpend {
    pub fn summary(&self) -> Option<&MerchantSummary> {
        match self {
            Self::Summary(summary) => Some(summary),
            Self::NoUpiTransactions => None,
        }
    }
}

/// Everything the pipeline derives from one statement file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementReport {
    /// Zero-based index of the header row in the sheet
    pub header_row: usize,
    pub rows: Vec<StatementRow>,
    pub transactions: Vec<NormalizedTransaction>,
    pub upi: UpiSpend,
}
