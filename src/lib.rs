//! # Rusty Table
//!
//! Converts between the rows of a spreadsheet range and named-field records.
//!
//! ## Features
//!
//! - **Grid to records**: every data row below the header rows becomes a [`Record`]
//!   keyed by field name and tagged with its 1-based sheet row id
//! - **Records to grid**: records are written back in field order, header rows first,
//!   with an empty string for every field a record lacks
//! - **Conversion cache**: converting the same grid twice returns the cached records
//! - **Row patching**: overwrite only the cells named by a partial record
//! - **Blocks**: group matching rows into runs of consecutive row ids, for deleting
//!   or formatting them in as few range calls as possible
//! - **Sheet host seam**: write a record collection through any [`SheetHost`]
//!
//! The adapter performs no I/O of its own.
//!
//! ```
//! use rusty_table::{Options, TableAdapter, Value};
//!
//! let mut adapter = TableAdapter::new(Options::default().with_num_headers(1).with_fields("name, qty"));
//! let grid = vec![
//!     vec![Value::from("Name"), Value::from("Qty")],
//!     vec![Value::from("bolt"), Value::from(4)],
//! ];
//! let records = adapter.grid_to_records(&grid);
//! assert_eq!(records[0].row_id(), Some(2));
//! assert_eq!(records[0].get("qty"), Some(&Value::from(4)));
//! ```
mod error;
pub mod spreadsheet;
pub mod table;

pub use error::{ResultMessage, TableError};
pub use spreadsheet::{DataRange, Grid, RangeError, Row, SheetHost, Value};
pub use table::{get_blocks, Block, BlockBuilder, Fields, Options, Record, TableAdapter};
