use crate::error::{ResultMessage, TableError};
use crate::spreadsheet::{DataRange, Grid, Row, SheetHost, Value};
use crate::table::memo::Memo;
use crate::table::options::{Fields, Options, Resolved};
use crate::table::record::Record;
use anyhow::Context;
use log::{debug, trace};
use std::borrow::Cow;

/// Converts between the grid of a sheet range and named-field records.
///
/// The adapter remembers the last grid it converted (and the last grid it
/// produced), so converting the same grid again hands back the cached records
/// instead of rebuilding them. Callers always get their own copies; the cache
/// is never shared.
#[derive(Clone, Debug)]
pub struct TableAdapter {
    sheet_name: String,
    num_headers: usize,
    fields: Fields,
    memo: Memo,
}

impl Default for TableAdapter {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl TableAdapter {
    pub fn new(options: Options) -> Self {
        let Resolved { sheet_name, num_headers, fields } = options.into();
        let memo = Memo::prefilled(num_headers, fields.len());
        Self { sheet_name, num_headers, fields, memo }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    pub fn num_headers(&self) -> usize {
        self.num_headers
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// First data row number (1-based) after the header rows.
    pub fn first_row(&self) -> usize {
        self.num_headers.saturating_add(1)
    }

    /// Field name at a zero-based column position.
    pub fn field_at(&self, index: usize) -> Option<&str> {
        self.fields.get(index)
    }

    /// 1-based column number of a field.
    pub fn column_index_of(&self, field: &str) -> Option<usize> {
        self.fields.position(field).map(|index| index + 1)
    }

    /// Header rows from the last conversion, or blank rows before any conversion.
    pub fn header_rows(&self) -> Cow<'_, [Row]> {
        self.memo.header_rows()
    }

    /// Data rows from the last conversion.
    pub fn data_rows(&self) -> &[Row] {
        &self.memo.data_rows
    }

    /// Records from the last conversion.
    pub fn records(&self) -> &[Record] {
        &self.memo.records
    }

    /// Number of times the cached conversion has been rebuilt.
    pub fn memo_generation(&self) -> u64 {
        self.memo.generation
    }

    /// Maps row values onto fields by position.
    /// Values past the last field are dropped; the row id is left unset.
    pub fn row_to_record(&self, values: &[Value]) -> Record {
        values
            .iter()
            .enumerate()
            .filter_map(|(index, value)| self.field_at(index).map(|field| (field, value.clone())))
            .collect()
    }

    /// One value per field in field order. A field the record lacks becomes an empty string.
    pub fn record_to_row(&self, record: &Record) -> Row {
        self.fields
            .iter()
            .map(|field| record.get(field).cloned().unwrap_or_else(Value::blank))
            .collect()
    }

    /// Converts a whole grid into records, skipping the header rows.
    ///
    /// Each record gets the 1-based row id of its grid row. If `grid` equals the
    /// grid of the previous conversion the cached records are returned.
    pub fn grid_to_records(&mut self, grid: &[Row]) -> Vec<Record> {
        if self.memo.matches(grid) {
            debug!("Sheet '{}': cache hit for {} rows", self.sheet_name, grid.len());
            return self.memo.records.clone();
        }

        let (header_rows, data_rows) = grid.split_at(self.num_headers.min(grid.len()));
        let records: Vec<Record> = data_rows
            .iter()
            .enumerate()
            .map(|(index, values)| {
                let mut record = self.row_to_record(values);
                record.set_row_id(index + 1 + self.num_headers);
                record
            })
            .collect();

        debug!(
            "Sheet '{}': converted {} header rows and {} data rows",
            self.sheet_name,
            header_rows.len(),
            data_rows.len()
        );
        self.memo = self.memo.next(grid.to_vec(), header_rows.to_vec(), data_rows.to_vec(), records.clone());
        records
    }

    /// Converts records back into a grid, header rows first.
    ///
    /// Explicit `header_rows` replace the remembered ones; otherwise the header rows of
    /// the last conversion are reused. The produced grid becomes the cached grid, so
    /// converting it back with `grid_to_records` is a cache hit.
    pub fn records_to_grid(&mut self, records: &[Record], header_rows: Option<&[Row]>) -> Grid {
        let data_rows: Grid = records.iter().map(|record| self.record_to_row(record)).collect();
        let header_rows = match header_rows {
            Some(header_rows) => header_rows.to_vec(),
            None => self.memo.header_rows().into_owned(),
        };

        let mut grid = Grid::with_capacity(header_rows.len() + data_rows.len());
        grid.extend(header_rows.iter().cloned());
        grid.extend(data_rows.iter().cloned());

        debug!(
            "Sheet '{}': produced grid with {} header rows and {} data rows",
            self.sheet_name,
            header_rows.len(),
            data_rows.len()
        );
        self.memo = self.memo.next(grid.clone(), header_rows, data_rows, records.to_vec());
        grid
    }

    /// Returns a copy of `values` with every position whose field is set in `patch` replaced.
    /// The row keeps its length; patch fields without a position are ignored.
    pub fn patch_row(&self, values: &[Value], patch: &Record) -> Row {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                self.field_at(index)
                    .and_then(|field| patch.get(field))
                    .unwrap_or(value)
                    .clone()
            })
            .collect()
    }

    /// Sheet range covering `num_rows` data rows: starts at the first data row in
    /// column A and spans one column per field.
    pub fn data_range(&self, num_rows: usize) -> DataRange {
        DataRange::new(self.first_row(), 1, num_rows, self.fields.len())
    }

    /// Replaces the sheet's data block with `records` through `host`.
    ///
    /// The host is cleared, written and flushed in that order. Afterwards the cached
    /// grid and records no longer describe the sheet and are dropped; the header
    /// rows are kept.
    pub fn write_records<H: SheetHost + ?Sized>(&mut self, host: &mut H, records: &[Record]) -> Result<DataRange, TableError> {
        let range = self.data_range(records.len());
        let values: Grid = records.iter().map(|record| self.record_to_row(record)).collect();

        debug!("Sheet '{}': writing {} records to {}", self.sheet_name, records.len(), range);
        write_to_host(host, &range, &values)
            .map_err(TableError::from)
            .with_prefix(&format!("Write sheet '{}' at {}", self.sheet_name, range))?;

        self.memo = self.memo.headers_only();
        Ok(range)
    }
}

fn write_to_host<H: SheetHost + ?Sized>(host: &mut H, range: &DataRange, values: &[Row]) -> anyhow::Result<()> {
    host.clear().context("Clear sheet failed")?;
    if range.is_empty() {
        trace!("Nothing to write at {}", range);
    } else {
        host.set_values(range, values)
            .with_context(|| format!("Set values at {} failed", range))?;
    }
    host.flush().context("Flush failed")?;
    Ok(())
}
