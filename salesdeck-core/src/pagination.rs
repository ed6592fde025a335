//! Page arithmetic for the list pipeline.
//!
//! `total_pages = ceil(count / rows_per_page)` and `page` never exceeds
//! `max(0, total_pages - 1)`. An empty collection has zero pages but is
//! displayed as "page 1 of 1".

use crate::error::{ListError, ListResult};
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    rows_per_page: usize,
}

impl Pagination {
    pub fn new(rows_per_page: usize) -> ListResult<Self> {
        if rows_per_page == 0 {
            return Err(ListError::InvalidRowsPerPage);
        }
        Ok(Self {
            page: 0,
            rows_per_page,
        })
    }

    /// Infallible constructor for already-validated configuration values.
    pub(crate) fn at_least_one_row(rows_per_page: usize) -> Self {
        Self {
            page: 0,
            rows_per_page: rows_per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.rows_per_page)
    }

    /// Page count for display; at least 1.
    pub fn display_total_pages(&self, count: usize) -> usize {
        self.total_pages(count).max(1)
    }

    pub fn last_page(&self, count: usize) -> usize {
        self.total_pages(count).saturating_sub(1)
    }

    /// Request a page; the value is clamped into range for `count` rows.
    pub fn set_page(&mut self, page: usize, count: usize) {
        self.page = page.min(self.last_page(count));
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Change rows per page and go back to the first page.
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> ListResult<()> {
        if rows_per_page == 0 {
            return Err(ListError::InvalidRowsPerPage);
        }
        self.rows_per_page = rows_per_page;
        self.page = 0;
        Ok(())
    }

    /// Pull an out-of-range page back to the last valid page. Returns whether
    /// the page moved.
    pub fn clamp(&mut self, count: usize) -> bool {
        let last = self.last_page(count);
        if self.page > last {
            self.page = last;
            return true;
        }
        false
    }

    /// Index range of the current page within `count` ordered rows.
    pub fn slice_range(&self, count: usize) -> Range<usize> {
        let page = self.page.min(self.last_page(count));
        let start = (page * self.rows_per_page).min(count);
        let end = (start + self.rows_per_page).min(count);
        start..end
    }

    pub fn has_next(&self, count: usize) -> bool {
        self.page < self.last_page(count)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }
}
