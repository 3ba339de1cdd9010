//! Integration tests for sift-core
//!
//! These tests exercise the full read → locate header → load → summarize workflow.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;

use rust_decimal::Decimal;
use sift_core::{
    analyze_path, analyze_table, export::write_summary_csv, Cell, Error, RawTable,
    StatementLayout, UpiSpend,
};

/// HDFC-style export: five preamble rows, header at index 5, one non-UPI
/// withdrawal, two Zomato payments in different casing, one deposit
fn hdfc_statement_csv() -> &'static str {
    r#"HDFC BANK Ltd.,,,
Page No .: 1,,,
MR. TEST CUSTOMER,,,
Account No :50100012345678,,,
Statement From : 01/04/2024 To : 30/04/2024,,,
Date,Narration,Withdrawal Amt.,Deposit Amt.
********,**********,*****,*****
01/04/24,NEFT-TRANSFER-XYZ,1000.00,
03/04/24,upi-zomato-111,250.50,
05/04/24,UPI-ZOMATO-222,149.50,
07/04/24,NEFT CR-SALARY APRIL,,50000.00
"#
}

fn hdfc_statement_table() -> RawTable {
    let mut rows: Vec<Vec<Cell>> = vec![
        vec![Cell::from("HDFC BANK Ltd.")],
        vec![Cell::from("Page No .: 1")],
        vec![Cell::from("MR. TEST CUSTOMER")],
        vec![Cell::from("Account No :50100012345678")],
        vec![Cell::Empty],
    ];
    rows.push(
        ["Date", "Narration", "Withdrawal Amt.", "Deposit Amt."]
            .iter()
            .map(|s| Cell::from(*s))
            .collect(),
    );
    rows.push(vec![
        Cell::from("01/04/24"),
        Cell::from("NEFT-TRANSFER-XYZ"),
        Cell::Number(1000.0),
        Cell::Empty,
    ]);
    rows.push(vec![
        Cell::from("03/04/24"),
        Cell::from("upi-zomato-111"),
        Cell::Number(250.5),
        Cell::Empty,
    ]);
    rows.push(vec![
        Cell::from("05/04/24"),
        Cell::from("UPI-ZOMATO-222"),
        Cell::Number(149.5),
        Cell::Empty,
    ]);
    RawTable::new(rows)
}

// =============================================================================
// End-to-end Tests
// =============================================================================

#[test]
fn test_end_to_end_table() {
    let report = analyze_table(&hdfc_statement_table(), &StatementLayout::default())
        .expect("analysis should succeed");

    assert_eq!(report.header_row, 5);
    assert_eq!(report.transactions.len(), 3);
    assert_eq!(report.transactions[1].narration, "UPI-ZOMATO-111");

    let summary = report.upi.summary().expect("UPI summary");
    assert_eq!(summary.merchants.len(), 1);
    assert_eq!(summary.top_merchant, "ZOMATO");
    assert_eq!(summary.top_amount, Decimal::from(400));
    assert_eq!(summary.grand_total, Decimal::from(400));
    assert_eq!(summary.merchants[0].transactions, 2);
}

#[test]
fn test_end_to_end_csv_file() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(hdfc_statement_csv().as_bytes()).unwrap();

    let report = analyze_path(file.path(), &StatementLayout::default())
        .expect("analysis should succeed");

    assert_eq!(report.header_row, 5);
    // Separator, three withdrawals, one deposit
    assert_eq!(report.rows.len(), 5);
    assert_eq!(report.transactions.len(), 3);

    let summary = report.upi.summary().expect("UPI summary");
    assert_eq!(summary.top_merchant, "ZOMATO");
    assert_eq!(summary.top_amount, "400.00".parse::<Decimal>().unwrap());
}

#[test]
fn test_csv_file_matches_table() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(hdfc_statement_csv().as_bytes()).unwrap();

    let from_file = analyze_path(file.path(), &StatementLayout::default()).unwrap();
    let from_table = analyze_table(&hdfc_statement_table(), &StatementLayout::default()).unwrap();

    assert_eq!(from_file.header_row, from_table.header_row);
    assert_eq!(from_file.transactions, from_table.transactions);
    assert_eq!(from_file.upi, from_table.upi);
}

#[test]
fn test_end_to_end_xlsx_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/hdfc_statement.xlsx");

    let report = analyze_path(&path, &StatementLayout::default())
        .expect("analysis should succeed");

    assert_eq!(report.header_row, 5);
    // Three withdrawals, one deposit
    assert_eq!(report.rows.len(), 4);
    assert_eq!(
        report.transactions[0].date,
        NaiveDate::from_ymd_opt(2024, 4, 1)
    );

    let from_table = analyze_table(&hdfc_statement_table(), &StatementLayout::default()).unwrap();
    assert_eq!(report.transactions, from_table.transactions);
    assert_eq!(report.upi, from_table.upi);
}

#[test]
fn test_no_upi_transactions_is_not_an_error() {
    let csv = "Date,Narration,Withdrawal Amt.\n01/04/24,NEFT-TRANSFER-XYZ,10\n";
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(csv.as_bytes()).unwrap();

    let report = analyze_path(file.path(), &StatementLayout::default()).unwrap();
    assert_eq!(report.upi, UpiSpend::NoUpiTransactions);
    assert_eq!(report.transactions.len(), 1);

    // Rendering the empty state must not fail
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["upi"]["status"], "no_upi_transactions");
}

#[test]
fn test_corrupt_spreadsheet_is_file_format_error() {
    let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    file.write_all(b"PK\x03\x04 truncated archive").unwrap();

    let result = analyze_path(file.path(), &StatementLayout::default());
    assert!(matches!(result, Err(Error::FileFormat(_))));
}

#[test]
fn test_custom_layout() {
    let layout = StatementLayout::from_toml(
        r#"
[header]
narration_token = "description"

[columns]
narration = "Description"
withdrawal = "Debit"
"#,
    )
    .unwrap();

    let table = RawTable::new(vec![
        vec![Cell::from("Date"), Cell::from("Description"), Cell::from("Debit")],
        vec![Cell::from("01/04/24"), Cell::from("UPI-SWIGGY-1"), Cell::Number(99.0)],
    ]);

    let report = analyze_table(&table, &layout).unwrap();
    assert_eq!(report.upi.summary().unwrap().top_merchant, "SWIGGY");
}

#[test]
fn test_summary_export_round_trip_through_pipeline() {
    let report = analyze_table(&hdfc_statement_table(), &StatementLayout::default()).unwrap();

    let mut out = Vec::new();
    write_summary_csv(report.upi.summary().unwrap(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Merchant,Total Spent,Transactions\nZOMATO,400.00,2\n"
    );
}
