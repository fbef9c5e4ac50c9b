use crate::spreadsheet::reference::{cell_reference, column_number, row_number};
use regex::Regex;
use std::fmt::Display;
use thiserror::Error;

/// Errors related to A1-style range parsing.
#[derive(Error, Debug, PartialEq)]
pub enum RangeError {
    #[error("Invalid range format '{0}'")]
    Format(String),
}

/// A rectangular block of cells anchored at a 1-based row and column,
/// in the shape a sheet host expects for `getRange(row, column, numRows, numColumns)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DataRange {
    /// First row (1-based)
    pub row: usize,
    /// First column (1-based)
    pub column: usize,
    /// Number of rows covered, may be zero
    pub num_rows: usize,
    /// Number of columns covered, may be zero
    pub num_columns: usize,
}

impl DataRange {
    pub fn new(row: usize, column: usize, num_rows: usize, num_columns: usize) -> Self {
        Self { row, column, num_rows, num_columns }
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0 || self.num_columns == 0
    }

    /// Last row covered (1-based). Equals `row` for empty ranges.
    pub fn last_row(&self) -> usize {
        self.row + self.num_rows.max(1) - 1
    }

    /// Last column covered (1-based). Equals `column` for empty ranges.
    pub fn last_column(&self) -> usize {
        self.column + self.num_columns.max(1) - 1
    }

    /// Renders the range in A1 notation, e.g. `A2:C4`.
    /// Single-cell and empty ranges render as their anchor cell only.
    pub fn to_a1(&self) -> String {
        let anchor = cell_reference(self.row, self.column);
        if self.is_empty() || (self.num_rows == 1 && self.num_columns == 1) {
            anchor
        } else {
            format!("{}:{}", anchor, cell_reference(self.last_row(), self.last_column()))
        }
    }
}

impl Display for DataRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_a1())
    }
}

impl TryFrom<&str> for DataRange {
    type Error = RangeError;

    /// Parses A1 notation (`"B2"`, `"B2:D10"`), case-insensitive.
    /// Corners given in reverse order are normalized.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let pattern = Regex::new(r"^([A-Z]+)(\d+)(?::([A-Z]+)(\d+))?$").expect("Hardcode regex pattern");
        let text = value.trim().to_ascii_uppercase();
        let error = || RangeError::Format(value.to_owned());
        let captures = pattern.captures(text.as_str()).ok_or_else(error)?;

        let first_column = captures.get(1).and_then(|m| column_number(m.as_str())).ok_or_else(error)?;
        let first_row = captures.get(2).and_then(|m| row_number(m.as_str())).ok_or_else(error)?;
        let (last_column, last_row) = match (captures.get(3), captures.get(4)) {
            (Some(column), Some(row)) => (
                column_number(column.as_str()).ok_or_else(error)?,
                row_number(row.as_str()).ok_or_else(error)?,
            ),
            _ => (first_column, first_row),
        };

        let (row, row_end) = (first_row.min(last_row), first_row.max(last_row));
        let (column, column_end) = (first_column.min(last_column), first_column.max(last_column));
        Ok(DataRange::new(row, column, row_end - row + 1, column_end - column + 1))
    }
}
