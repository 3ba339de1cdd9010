//! UPI merchant extraction
//!
//! UPI narrations look like `UPI-<MERCHANT>-<VPA>-<REF>-<NOTE>`. The merchant
//! is the text between the first `UPI-` and the next `-`.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::{MerchantTransaction, NormalizedTransaction};

fn upi_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)UPI-(.*?)-").expect("valid regex"))
}

/// Extract the merchant from a UPI narration, if it is one
pub fn extract_upi_merchant(narration: &str) -> Option<String> {
    upi_pattern()
        .captures(narration)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

/// Label transactions with their UPI merchant, dropping non-UPI rows
pub fn label_merchants(transactions: &[NormalizedTransaction]) -> Vec<MerchantTransaction> {
    transactions
        .iter()
        .filter_map(|tx| {
            let merchant = extract_upi_merchant(&tx.narration)?;
            Some(MerchantTransaction {
                transaction: tx.clone(),
                upi_merchant: merchant,
            })
        })
        .collect()
}
