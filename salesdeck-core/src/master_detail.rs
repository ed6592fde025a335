//! Master-detail composition: one list page with its selection.
//!
//! Rows come from the pipeline's current page; the detail record is resolved
//! against the full source so it stays open when filters hide its row.

use crate::error::{ListError, ListResult};
use crate::field::Entity;
use crate::pipeline::{ListPipeline, PageView};
use crate::selection::SelectionController;

pub struct ListPage<E: Entity> {
    pipeline: ListPipeline<E>,
    selection: SelectionController,
    /// Highlighted row within the current page.
    cursor: usize,
}

impl<E: Entity> ListPage<E> {
    pub fn new(pipeline: ListPipeline<E>, selection: SelectionController) -> Self {
        Self {
            pipeline,
            selection,
            cursor: 0,
        }
    }

    pub fn pipeline(&self) -> &ListPipeline<E> {
        &self.pipeline
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Change pipeline inputs (search, filters, sort, paging). The cursor is
    /// pulled back onto the page afterwards.
    pub fn update<R>(&mut self, change: impl FnOnce(&mut ListPipeline<E>) -> R) -> R {
        let result = change(&mut self.pipeline);
        self.clamp_cursor();
        result
    }

    pub fn rows(&self) -> PageView<'_, E> {
        self.pipeline.view()
    }

    /// No record survives the filters; render "No results" instead of rows.
    pub fn is_empty_state(&self) -> bool {
        self.pipeline.filtered_count() == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_record(&self) -> Option<&E> {
        self.rows().rows.get(self.cursor).copied()
    }

    /// Select the record on row `index` of the current page.
    pub fn click_row(&mut self, index: usize) -> bool {
        let id = match self.rows().rows.get(index) {
            Some(record) => record.id().to_string(),
            None => return false,
        };
        self.cursor = index;
        self.selection.select(&id);
        true
    }

    /// Select the highlighted row.
    pub fn open_cursor(&mut self) -> bool {
        self.click_row(self.cursor)
    }

    /// Move the highlight by `delta` rows, crossing into the neighbouring
    /// page at either edge.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.rows().rows.len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        match self.cursor.checked_add_signed(delta) {
            Some(target) if target < len => self.cursor = target,
            Some(_) => {
                let page = self.pipeline.page();
                self.pipeline.next_page();
                self.cursor = if self.pipeline.page() == page { len - 1 } else { 0 };
            }
            None => {
                let page = self.pipeline.page();
                self.pipeline.prev_page();
                self.cursor = if self.pipeline.page() == page {
                    0
                } else {
                    self.rows().rows.len().saturating_sub(1)
                };
            }
        }
    }

    /// The open record, if the selected id still exists anywhere in the source.
    pub fn detail(&self) -> Option<&E> {
        self.selection.resolve(self.pipeline.source())
    }

    pub fn close_detail(&mut self) {
        self.selection.close();
    }

    /// Header click on column `index`.
    pub fn sort_by_column(&mut self, index: usize) -> ListResult<()> {
        let columns = self.pipeline.config().columns();
        let column = columns.get(index).ok_or(ListError::ColumnOutOfRange {
            index,
            count: columns.len(),
        })?;
        if !column.sortable {
            return Err(ListError::UnsortableField {
                field: column.title.to_string(),
            });
        }
        let field = column.field;
        self.update(|pipeline| pipeline.toggle_sort(field));
        Ok(())
    }

    fn clamp_cursor(&mut self) {
        let len = self.rows().rows.len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
