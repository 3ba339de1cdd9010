//! Header row detection
//!
//! Statement exports carry a variable-length preamble (bank address,
//! account details) above the real column header.

use tracing::debug;

use crate::error::{Error, Result};
use crate::layout::HeaderTokens;
use crate::sheet::{Cell, RawTable};

/// Stringified, trimmed, lower-cased form of a cell
pub(crate) fn normalize_cell(cell: &Cell) -> String {
    cell.to_string().trim().to_lowercase()
}

/// Find the first row containing both header tokens as whole cells
///
/// Cells are trimmed before the case-insensitive comparison, so `" Date "`
/// matches where an exact cell comparison would not.
pub fn locate_header(table: &RawTable, tokens: &HeaderTokens) -> Result<usize> {
    let date = tokens.date_token.trim().to_lowercase();
    let narration = tokens.narration_token.trim().to_lowercase();

    let found = table.rows().iter().position(|row| {
        let values: Vec<String> = row.iter().map(normalize_cell).collect();
        values.contains(&date) && values.contains(&narration)
    });

    match found {
        Some(idx) => {
            debug!("Header row found at index {}", idx);
            Ok(idx)
        }
        None => Err(Error::HeaderNotFound {
            date_token: tokens.date_token.clone(),
            narration_token: tokens.narration_token.clone(),
        }),
    }
}
