//! CSV export of the merchant summary and normalized transactions

use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::Result;
use crate::models::{MerchantSummary, NormalizedTransaction};

#[derive(Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "Merchant")]
    merchant: &'a str,
    #[serde(rename = "Total Spent")]
    total: String,
    #[serde(rename = "Transactions")]
    transactions: usize,
}

#[derive(Serialize)]
struct TransactionRecord<'a> {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Narration")]
    narration: &'a str,
    #[serde(rename = "Withdrawal Amt.")]
    withdrawal: String,
}

/// Two decimal places, as amounts appear on the statement
fn amount(value: Decimal) -> String {
    format!("{:.2}", value)
}

/// Write the per-merchant summary, highest total first
pub fn write_summary_csv<W: Write>(summary: &MerchantSummary, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for m in &summary.merchants {
        wtr.serialize(SummaryRecord {
            merchant: &m.merchant,
            total: amount(m.total),
            transactions: m.transactions,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the normalized withdrawal rows
pub fn write_transactions_csv<W: Write>(
    transactions: &[NormalizedTransaction],
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for tx in transactions {
        wtr.serialize(TransactionRecord {
            date: tx.date.map(|d| d.to_string()).unwrap_or_default(),
            narration: &tx.narration,
            withdrawal: amount(tx.withdrawal),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MerchantTotal;
    use chrono::NaiveDate;

    #[test]
    fn test_write_summary_csv() {
        let summary = MerchantSummary {
            top_merchant: "PAYTM".into(),
            top_amount: Decimal::from(150),
            merchants: vec![
                MerchantTotal {
                    merchant: "PAYTM".into(),
                    total: Decimal::from(150),
                    transactions: 2,
                },
                MerchantTotal {
                    merchant: "AMAZON PAY".into(),
                    total: "30.5".parse().unwrap(),
                    transactions: 1,
                },
            ],
            grand_total: "180.5".parse().unwrap(),
        };

        let mut out = Vec::new();
        write_summary_csv(&summary, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Merchant,Total Spent,Transactions\nPAYTM,150.00,2\nAMAZON PAY,30.50,1\n"
        );
    }

    #[test]
    fn test_write_transactions_csv() {
        let transactions = vec![
            NormalizedTransaction {
                date: NaiveDate::from_ymd_opt(2024, 4, 1),
                narration: "UPI-ZOMATO-111".into(),
                withdrawal: Decimal::from(250),
            },
            NormalizedTransaction {
                date: None,
                narration: "ATM WDL, ANDHERI".into(),
                withdrawal: Decimal::ZERO,
            },
        ];

        let mut out = Vec::new();
        write_transactions_csv(&transactions, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Date,Narration,Withdrawal Amt.\n2024-04-01,UPI-ZOMATO-111,250.00\n,\"ATM WDL, ANDHERI\",0.00\n"
        );
    }
}
