use crate::table::record::Record;

/// A run of consecutive row ids: rows `start_row_id .. start_row_id + count`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub start_row_id: usize,
    pub count: usize,
}

impl Block {
    /// Row id right after the last row of the block.
    pub fn end_row_id(&self) -> usize {
        self.start_row_id + self.count
    }

    pub fn contains(&self, row_id: usize) -> bool {
        self.start_row_id <= row_id && row_id < self.end_row_id()
    }
}

/// Folds row ids into blocks of consecutive ids.
///
/// Blocks are kept oldest first internally; `finish` hands them out most recent first.
#[derive(Clone, Debug, Default)]
pub struct BlockBuilder {
    blocks: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extends the most recent block when `row_id` continues it, starts a new one otherwise.
    pub fn push(&mut self, row_id: usize) {
        match self.blocks.last_mut() {
            Some(head) if head.end_row_id() == row_id => head.count += 1,
            _ => self.blocks.push(Block { start_row_id: row_id, count: 1 }),
        }
    }

    /// Most recently started block first.
    pub fn finish(mut self) -> Vec<Block> {
        self.blocks.reverse();
        self.blocks
    }
}

/// Groups the records accepted by `predicate` into blocks of consecutive row ids.
///
/// Rejected records are dropped before grouping, so a rejected row between two
/// accepted ones splits them into separate blocks. Records without a row id are
/// skipped. The result is ordered most recent block first, which lets a caller
/// delete the blocks from a sheet without shifting the rows of the blocks still
/// to be deleted.
pub fn get_blocks<'a, I, P>(data: I, mut predicate: P) -> Vec<Block>
where
    I: IntoIterator<Item = &'a Record>,
    P: FnMut(&Record) -> bool,
{
    let mut builder = BlockBuilder::new();
    data.into_iter()
        .filter(|record| predicate(*record))
        .filter_map(Record::row_id)
        .for_each(|row_id| builder.push(row_id));
    builder.finish()
}
