//! Sift Core Library
//!
//! Finds where your UPI money goes from a bank statement spreadsheet:
//! - Sheet decoding (xlsx/xls/ods and CSV exports) into raw rows
//! - Header row detection below the statement preamble
//! - Typed statement rows resolved through the header
//! - Withdrawal filtering and narration normalization
//! - UPI merchant extraction and per-merchant aggregation
//! - CSV export of the summary and transactions

pub mod error;
pub mod export;
pub mod header;
pub mod layout;
pub mod merchant;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod sheet;
pub mod statement;
pub mod summary;

pub use error::{Error, Result};
pub use layout::{LayoutSource, StatementLayout};
pub use models::{
    MerchantSummary, MerchantTotal, MerchantTransaction, NormalizedTransaction, StatementReport,
    StatementRow, UpiSpend,
};
pub use pipeline::{analyze_path, analyze_table};
pub use sheet::{Cell, RawTable};
