use crate::spreadsheet::range::DataRange;
use crate::spreadsheet::Row;
use anyhow::Result;

/// The host side of a sheet: whatever owns the real spreadsheet range API.
///
/// The table adapter never performs I/O itself. When a record collection has
/// to be persisted it drives an implementation of this trait, in the order
/// `clear`, `set_values`, `flush`.
pub trait SheetHost {
    /// Clears the sheet content below the header block.
    fn clear(&mut self) -> Result<()>;

    /// Writes `values` into `range`. `values` has exactly `range.num_rows`
    /// rows of `range.num_columns` cells.
    fn set_values(&mut self, range: &DataRange, values: &[Row]) -> Result<()>;

    /// Applies all pending changes.
    fn flush(&mut self) -> Result<()>;
}
