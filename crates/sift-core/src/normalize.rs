//! Withdrawal row filter and narration normalization

use crate::models::{NormalizedTransaction, StatementRow};

/// Upper-case and trim a narration
pub fn normalize_narration(narration: &str) -> String {
    narration.to_uppercase().trim().to_string()
}

/// Keep rows that have both a narration and a withdrawal amount
///
/// A zero withdrawal is a value, not an absence, so it is kept. Order of
/// the surviving rows is preserved.
pub fn normalize_transactions(rows: &[StatementRow]) -> Vec<NormalizedTransaction> {
    rows.iter()
        .filter_map(|row| {
            let narration = row.narration.as_deref()?;
            let withdrawal = row.withdrawal?;
            Some(NormalizedTransaction {
                date: row.date,
                narration: normalize_narration(narration),
                withdrawal,
            })
        })
        .collect()
}
