use crate::spreadsheet::{Grid, Row, Value};
use std::borrow::Cow;
use crate::table::record::Record;

/// The last grid a table adapter converted, with everything derived from it.
///
/// A memo is never edited in place: each recompute builds a new one and
/// replaces the old one, bumping `generation`.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Memo {
    /// Grid last consumed or produced. None until the first conversion.
    pub(crate) grid: Option<Grid>,
    /// Leading header rows of `grid`
    pub(crate) header_rows: Grid,
    /// Shape (rows, cells per row) of the blank header block standing in for
    /// `header_rows` until the first conversion. Built only when read.
    pub(crate) blank_headers: Option<(usize, usize)>,
    /// Rows of `grid` after the header block
    pub(crate) data_rows: Grid,
    /// Records matching `data_rows`
    pub(crate) records: Vec<Record>,
    /// Number of rebuilds since the adapter was created
    pub(crate) generation: u64,
}

impl Memo {
    /// Initial state: `num_headers` blank header rows, one blank cell per field,
    /// kept as a shape until read.
    pub(crate) fn prefilled(num_headers: usize, num_fields: usize) -> Self {
        Memo {
            blank_headers: Some((num_headers, num_fields)).filter(|(rows, _)| *rows > 0),
            ..Default::default()
        }
    }

    /// Header rows, materializing the blank block if no conversion has happened yet.
    pub(crate) fn header_rows(&self) -> Cow<'_, [Row]> {
        match self.blank_headers {
            Some((rows, cells)) => Cow::Owned(vec![vec![Value::blank(); cells]; rows]),
            None => Cow::Borrowed(&self.header_rows),
        }
    }

    /// Memo after the sheet's data block was rewritten: only the header rows survive.
    pub(crate) fn headers_only(&mut self) -> Self {
        Memo {
            header_rows: std::mem::take(&mut self.header_rows),
            blank_headers: self.blank_headers,
            generation: self.generation + 1,
            ..Default::default()
        }
    }

    /// Cache lookup by structural equality.
    pub(crate) fn matches(&self, grid: &[Row]) -> bool {
        self.grid.as_deref() == Some(grid)
    }

    /// Builds the replacement memo for a fresh conversion.
    pub(crate) fn next(&self, grid: Grid, header_rows: Grid, data_rows: Grid, records: Vec<Record>) -> Self {
        Memo {
            grid: Some(grid),
            header_rows,
            blank_headers: None,
            data_rows,
            records,
            generation: self.generation + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_prefilled() {
        let memo = Memo::prefilled(2, 3);
        assert_eq!(memo.header_rows().as_ref(), vec![vec![Value::blank(); 3]; 2].as_slice());
        assert!(memo.header_rows.is_empty());
        assert!(memo.data_rows.is_empty());
        assert!(memo.records.is_empty());
        assert_eq!(memo.grid, None);
        assert_eq!(memo.generation, 0);
    }

    #[test]
    fn memo_prefilled_is_lazy() {
        let memo = Memo::prefilled(usize::MAX, usize::MAX);
        assert_eq!(memo.blank_headers, Some((usize::MAX, usize::MAX)));
        assert!(memo.header_rows.is_empty());
        assert!(Memo::prefilled(0, 3).header_rows().is_empty());
    }

    #[test]
    fn memo_headers_only_keeps_blank_block() {
        let mut memo = Memo::prefilled(1, 2);
        let next = memo.headers_only();
        assert_eq!(next.generation, 1);
        assert_eq!(next.header_rows().as_ref(), &[vec![Value::blank(); 2]]);
    }

    #[test]
    fn memo_next_replaces_blank_block() {
        let memo = Memo::prefilled(1, 2).next(vec![], vec![], vec![], vec![]);
        assert_eq!(memo.blank_headers, None);
        assert!(memo.header_rows().is_empty());
    }

    #[test]
    fn memo_never_matches_before_first_conversion() {
        assert!(!Memo::prefilled(0, 1).matches(&[]));
    }

    #[test]
    fn memo_next_bumps_generation() {
        let grid = vec![vec![Value::from("a")]];
        let memo = Memo::default().next(grid.clone(), vec![], grid.clone(), vec![]);
        assert_eq!(memo.generation, 1);
        assert!(memo.matches(&grid));
        assert!(!memo.matches(&[vec![Value::from("b")]]));
        assert_eq!(memo.next(vec![], vec![], vec![], vec![]).generation, 2);
    }
}
