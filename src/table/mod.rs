//! # Table Module
//!
//! The table adapter and the types it works with: construction options,
//! records, the conversion memo and the block builder.
pub mod adapter;
pub mod block;
pub mod options;
pub mod record;

mod memo;

pub use adapter::TableAdapter;
pub use block::{get_blocks, Block, BlockBuilder};
pub use options::{Fields, Options};
pub use record::Record;
