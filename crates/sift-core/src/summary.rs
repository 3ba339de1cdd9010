//! Per-merchant UPI spend aggregation

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{MerchantSummary, MerchantTotal, MerchantTransaction, UpiSpend};

/// Group by merchant and sum withdrawals, highest total first
///
/// Merchants with equal totals are ordered by name. An empty input is the
/// `NoUpiTransactions` state. Sums that leave `Decimal`'s range are an
/// [`Error::AmountOverflow`].
pub fn summarize(transactions: &[MerchantTransaction]) -> Result<UpiSpend> {
    // BTreeMap iterates by name, so the stable sort below keeps ties alphabetical
    let mut groups: BTreeMap<&str, (Decimal, usize)> = BTreeMap::new();
    for tx in transactions {
        let entry = groups
            .entry(tx.upi_merchant.as_str())
            .or_insert((Decimal::ZERO, 0));
        entry.0 = entry
            .0
            .checked_add(tx.transaction.withdrawal)
            .ok_or_else(|| Error::AmountOverflow(tx.upi_merchant.clone()))?;
        entry.1 += 1;
    }

    let mut merchants: Vec<MerchantTotal> = groups
        .into_iter()
        .map(|(merchant, (total, transactions))| MerchantTotal {
            merchant: merchant.to_string(),
            total,
            transactions,
        })
        .collect();
    merchants.sort_by(|a, b| b.total.cmp(&a.total));

    let Some(top) = merchants.first() else {
        return Ok(UpiSpend::NoUpiTransactions);
    };

    let mut grand_total = Decimal::ZERO;
    for m in &merchants {
        grand_total = grand_total
            .checked_add(m.total)
            .ok_or_else(|| Error::AmountOverflow("all merchants".to_string()))?;
    }

    Ok(UpiSpend::Summary(MerchantSummary {
        top_merchant: top.merchant.clone(),
        top_amount: top.total,
        grand_total,
        merchants,
    }))
}
