//! Statement table loader
//!
//! Resolves column positions from the detected header row and reads every
//! row below it into a typed [`StatementRow`].

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::header::normalize_cell;
use crate::layout::ColumnNames;
use crate::models::StatementRow;
use crate::sheet::{Cell, RawTable};

/// Column positions resolved from a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub narration: usize,
    pub withdrawal: usize,
    pub date: Option<usize>,
    pub reference: Option<usize>,
    pub value_date: Option<usize>,
    pub deposit: Option<usize>,
    pub closing_balance: Option<usize>,
}

impl ColumnMap {
    /// Resolve columns by header text (trimmed, case-insensitive)
    ///
    /// Narration and withdrawal are required; every missing required
    /// column is reported at once.
    pub fn resolve(header: &[Cell], names: &ColumnNames) -> Result<Self> {
        let normalized: Vec<String> = header.iter().map(normalize_cell).collect();
        let find = |name: &str| {
            let name = name.trim().to_lowercase();
            normalized.iter().position(|h| *h == name)
        };

        let narration = find(&names.narration);
        let withdrawal = find(&names.withdrawal);

        match (narration, withdrawal) {
            (Some(narration), Some(withdrawal)) => Ok(Self {
                narration,
                withdrawal,
                date: find(&names.date),
                reference: find(&names.reference),
                value_date: find(&names.value_date),
                deposit: find(&names.deposit),
                closing_balance: find(&names.closing_balance),
            }),
            _ => {
                let mut missing = Vec::new();
                if narration.is_none() {
                    missing.push(names.narration.clone());
                }
                if withdrawal.is_none() {
                    missing.push(names.withdrawal.clone());
                }
                Err(Error::MissingColumns(missing))
            }
        }
    }

    fn read_row(&self, row: &[Cell]) -> StatementRow {
        let cell = move |idx: Option<usize>| idx.and_then(|i| row.get(i));

        StatementRow {
            date: cell(self.date).and_then(parse_date),
            narration: cell(Some(self.narration)).and_then(Cell::as_text),
            reference: cell(self.reference).and_then(Cell::as_text),
            value_date: cell(self.value_date).and_then(parse_date),
            withdrawal: cell(Some(self.withdrawal)).and_then(parse_amount),
            deposit: cell(self.deposit).and_then(parse_amount),
            closing_balance: cell(self.closing_balance).and_then(parse_amount),
        }
    }
}

/// Read the rows below `header_row` through the header's column names
pub fn load_rows(
    table: &RawTable,
    header_row: usize,
    names: &ColumnNames,
) -> Result<Vec<StatementRow>> {
    let header = table.row(header_row).unwrap_or(&[]);
    let columns = ColumnMap::resolve(header, names)?;
    debug!("Resolved statement columns: {:?}", columns);

    let rows: Vec<StatementRow> = table
        .rows()
        .iter()
        .skip(header_row + 1)
        .filter(|row| !row.iter().all(Cell::is_empty))
        .map(|row| columns.read_row(row))
        .collect();

    debug!("Loaded {} statement rows", rows.len());
    Ok(rows)
}

/// Parse a date cell in the formats bank exports use
fn parse_date(cell: &Cell) -> Option<NaiveDate> {
    let s = match cell {
        Cell::Date(d) => return Some(*d),
        Cell::Text(s) => s.trim(),
        _ => return None,
    };

    let formats = [
        "%d/%m/%y", // 01/04/24 (HDFC)
        "%d/%m/%Y", // 01/04/2024
        "%Y-%m-%d", // 2024-04-01
        "%d-%m-%Y", // 01-04-2024
        "%d-%b-%Y", // 01-Apr-2024
    ];

    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Parse an amount cell, handling currency symbols and thousands separators
///
/// Cells that don't hold a number (blank, `*****` separators) are absent.
fn parse_amount(cell: &Cell) -> Option<Decimal> {
    match cell {
        Cell::Number(n) => {
            let amount = Decimal::from_f64(*n);
            if amount.is_none() {
                warn!("Amount {} is outside the decimal range, treating as absent", n);
            }
            amount
        }
        Cell::Text(s) => {
            let s = s.trim();
            let (negative, s) = match s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
                Some(inner) => (true, inner),
                None => (false, s),
            };
            let cleaned: String = s
                .chars()
                .filter(|c| !matches!(c, ',' | '₹' | ' '))
                .collect();
            let amount: Decimal = cleaned.parse().ok()?;
            Some(if negative { -amount } else { amount })
        }
        _ => None,
    }
}
