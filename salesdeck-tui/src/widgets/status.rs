//! Pagination footer widget.

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use salesdeck_core::PageView;

pub struct PaginationFooter {
    /// Zero-based.
    pub page: usize,
    /// Already at least 1.
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub rows_per_page: usize,
    pub style: Style,
}

impl PaginationFooter {
    pub fn from_view<E>(view: &PageView<'_, E>, style: Style) -> Self {
        Self {
            page: view.page,
            total_pages: view.display_total_pages(),
            filtered_count: view.filtered_count,
            total_count: view.total_count,
            rows_per_page: view.rows_per_page,
            style,
        }
    }

    pub fn text(&self) -> String {
        format!(
            "Page {} of {} | {} of {} records | {} per page [n/p page, +/- rows]",
            self.page + 1,
            self.total_pages,
            self.filtered_count,
            self.total_count,
            self.rows_per_page
        )
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let paragraph = Paragraph::new(self.text())
            .style(self.style)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
