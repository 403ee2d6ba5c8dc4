//! In-memory paged table.
//!
//! Rows are packed `ROWS_PER_PAGE` to a page with no header and no padding.
//! Pages are allocated (zeroed) the first time a slot inside them is touched
//! and live until the table is dropped.

use tracing::trace;

use crate::{PAGE_SIZE, ROW_SIZE, ROWS_PER_PAGE, TABLE_MAX_PAGES, TABLE_MAX_ROWS};

type Page = Box<[u8]>;

/// Bounded sequence of lazily-allocated pages plus the count of valid rows.
///
/// Valid rows are always the prefix `[0, num_rows)` of the row space.
pub struct Table {
    num_rows: usize,
    pages: Vec<Option<Page>>,
}

impl Table {
    pub fn new() -> Self {
        Self {
            num_rows: 0,
            pages: vec![None; TABLE_MAX_PAGES],
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn is_full(&self) -> bool {
        self.num_rows >= TABLE_MAX_ROWS
    }

    /// Number of pages that have been allocated so far.
    pub fn allocated_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    /// Byte window of `ROW_SIZE` bytes holding row `row_index`.
    ///
    /// # Panics
    ///
    /// Panics if `row_index >= TABLE_MAX_ROWS`; callers check capacity first.
    pub fn slot(&mut self, row_index: usize) -> &mut [u8] {
        assert!(
            row_index < TABLE_MAX_ROWS,
            "row {row_index} out of range (max {TABLE_MAX_ROWS})"
        );
        let page_num = row_index / ROWS_PER_PAGE;
        let page = self.pages[page_num].get_or_insert_with(|| {
            trace!(page_num, "allocating page");
            vec![0u8; PAGE_SIZE].into_boxed_slice()
        });

        let byte_offset = (row_index % ROWS_PER_PAGE) * ROW_SIZE;
        &mut page[byte_offset..byte_offset + ROW_SIZE]
    }

    /// Mark the next slot as holding a valid row.
    pub(crate) fn commit_row(&mut self) {
        debug_assert!(!self.is_full());
        self.num_rows += 1;
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}
