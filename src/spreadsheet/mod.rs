//! # Spreadsheet Module
//!
//! Plain cell values and grids as exchanged with a sheet host, A1-style range
//! addressing, and the host seam used to write a data block back to a sheet.
pub mod host;
pub mod range;
pub mod reference;
pub mod value;

pub use host::SheetHost;
pub use range::{DataRange, RangeError};
pub use value::Value;

/// One row of cell values, ordered by column.
pub type Row = Vec<Value>;

/// A rectangular block of rows as read from or written to a sheet range.
/// Row lengths are expected to match but are not enforced.
pub type Grid = Vec<Row>;
