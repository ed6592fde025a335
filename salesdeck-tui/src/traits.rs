//! Common traits for TUI components

use salesdeck_core::{Entity, FilterKind, FilterSelection, ListPage, ListResult};

/// Entity-independent controls of one list page.
///
/// Every page is a `ListPage<E>` with a different `E`; key handling goes
/// through this trait so it is written once for all six.
pub trait ListControls {
    fn search(&self) -> &str;

    fn set_search(&mut self, text: &str);

    fn move_cursor(&mut self, delta: isize);

    /// Select the highlighted row. False when the page has no rows.
    fn open_cursor(&mut self) -> bool;

    fn has_detail(&self) -> bool;

    fn close_detail(&mut self);

    /// Re-read the selection store after the app changed the location.
    fn resync_selection(&self);

    fn column_count(&self) -> usize;

    fn sort_by_column(&mut self, index: usize) -> ListResult<()>;

    fn next_page(&mut self);

    fn prev_page(&mut self);

    fn rows_per_page(&self) -> usize;

    fn set_rows_per_page(&mut self, rows: usize) -> ListResult<()>;

    fn filter_count(&self) -> usize;

    /// Selectable options of filter `index`, in display order.
    fn filter_options(&self, index: usize) -> Vec<String>;

    /// Add or remove `option` from filter `index`. A single-select filter
    /// switches to `option`, or back to "any" if it was already selected.
    fn toggle_filter_option(&mut self, index: usize, option: &str) -> ListResult<()>;

    fn clear_filters(&mut self);
}

impl<E: Entity> ListControls for ListPage<E> {
    fn search(&self) -> &str {
        self.pipeline().filters().search()
    }

    fn set_search(&mut self, text: &str) {
        self.update(|pipeline| pipeline.set_search(text));
    }

    fn move_cursor(&mut self, delta: isize) {
        ListPage::move_cursor(self, delta);
    }

    fn open_cursor(&mut self) -> bool {
        ListPage::open_cursor(self)
    }

    fn has_detail(&self) -> bool {
        self.detail().is_some()
    }

    fn close_detail(&mut self) {
        ListPage::close_detail(self);
    }

    fn resync_selection(&self) {
        self.selection().resync();
    }

    fn column_count(&self) -> usize {
        self.pipeline().config().columns().len()
    }

    fn sort_by_column(&mut self, index: usize) -> ListResult<()> {
        ListPage::sort_by_column(self, index)
    }

    fn next_page(&mut self) {
        self.update(|pipeline| pipeline.next_page());
    }

    fn prev_page(&mut self) {
        self.update(|pipeline| pipeline.prev_page());
    }

    fn rows_per_page(&self) -> usize {
        self.pipeline().rows_per_page()
    }

    fn set_rows_per_page(&mut self, rows: usize) -> ListResult<()> {
        self.update(|pipeline| pipeline.set_rows_per_page(rows))
    }

    fn filter_count(&self) -> usize {
        self.pipeline().config().filters().len()
    }

    fn filter_options(&self, index: usize) -> Vec<String> {
        let pipeline = self.pipeline();
        match pipeline.config().filters().get(index) {
            Some(spec) => spec.options_for(pipeline.source()),
            None => Vec::new(),
        }
    }

    fn toggle_filter_option(&mut self, index: usize, option: &str) -> ListResult<()> {
        let (field, kind) = match self.pipeline().config().filters().get(index) {
            Some(spec) => (spec.field, spec.kind),
            None => return Ok(()),
        };
        match kind {
            FilterKind::Single => {
                let already = matches!(
                    self.pipeline().filters().selection(field),
                    Some(FilterSelection::Single(Some(current))) if current == option
                );
                let next = if already { None } else { Some(option.to_string()) };
                self.update(|pipeline| pipeline.set_single(field, next))
            }
            FilterKind::Multi | FilterKind::ArrayMembership => {
                self.update(|pipeline| pipeline.toggle_filter_value(field, option))
            }
        }
    }

    fn clear_filters(&mut self) {
        self.update(|pipeline| pipeline.clear_filters());
    }
}
