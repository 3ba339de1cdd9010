//! Raw spreadsheet rows
//!
//! Decodes a statement file into a [`RawTable`]: rows of untyped cells with
//! no header assumed. Spreadsheets (xlsx, xls, ods) go through calamine and
//! take the first worksheet; `.csv` exports are read headerless.

use std::fmt;
use std::io::{Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Xlsx};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Error, Result};

/// A single untyped cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text content, or `None` for empty cells
    pub fn as_text(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Date(d) => write!(f, "{}", d),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Self::Empty
        } else {
            Self::Text(s.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Self::Empty,
            Data::String(s) => Self::from(s.as_str()),
            Data::Float(f) => Self::Number(*f),
            Data::Int(i) => Self::Number(*i as f64),
            Data::Bool(b) => Self::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(dt) => Self::Date(dt.date()),
                None => Self::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => Self::Text(s.clone()),
            // Formula errors (#N/A, #REF!) carry no usable value
            Data::Error(_) => Self::Empty,
        }
    }
}

/// Rows x columns of untyped cells, no header assumed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&[Cell]> {
        self.rows.get(idx).map(|r| r.as_slice())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a statement file, choosing the decoder from its extension
pub fn read_path(path: &Path) -> Result<RawTable> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    if is_csv {
        let file = std::fs::File::open(path)?;
        return read_csv(file);
    }

    // Surface a missing file as IO rather than a format problem
    if !path.exists() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} not found", path.display()),
        )));
    }

    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::FileFormat("workbook has no worksheets".into()))??;

    let table = RawTable::new(
        range
            .rows()
            .map(|row| row.iter().map(Cell::from).collect())
            .collect(),
    );
    debug!("Read {} rows from {}", table.len(), path.display());
    Ok(table)
}

/// Decode an in-memory xlsx workbook (first worksheet)
pub fn read_workbook<R: Read + Seek>(reader: R) -> Result<RawTable> {
    let mut workbook: Xlsx<R> = Xlsx::new(reader)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::FileFormat("workbook has no worksheets".into()))??;

    Ok(RawTable::new(
        range
            .rows()
            .map(|row| row.iter().map(Cell::from).collect())
            .collect(),
    ))
}

/// Read a headerless CSV export; every cell is text
pub fn read_csv<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| {
            if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) {
                Error::FileFormat(e.to_string())
            } else {
                Error::Csv(e)
            }
        })?;
        rows.push(record.iter().map(Cell::from).collect());
    }

    debug!("Read {} CSV rows", rows.len());
    Ok(RawTable::new(rows))
}
