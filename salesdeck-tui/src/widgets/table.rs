//! Table widget for one list page: sortable headers, current page rows.

use crate::theme::{header_label, SynthBruteTheme};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use salesdeck_core::{Entity, ListPage};

pub struct ListTable<'a, E: Entity> {
    pub title: &'a str,
    pub page: &'a ListPage<E>,
    /// Column the sort key acts on; underlined.
    pub header_cursor: usize,
    pub focused: bool,
    pub theme: &'a SynthBruteTheme,
}

impl<'a, E: Entity> ListTable<'a, E> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        if self.page.is_empty_state() {
            let empty = Paragraph::new("No results")
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.text_dim))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let pipeline = self.page.pipeline();
        let columns = pipeline.config().columns();
        let sort = pipeline.sort();

        let header = Row::new(columns.iter().enumerate().map(|(index, column)| {
            let sorted = (column.field == sort.field).then_some(sort.direction);
            let mut style = if sorted.is_some() {
                self.theme.sorted_header()
            } else if column.sortable {
                Style::default().fg(self.theme.text)
            } else {
                Style::default().fg(self.theme.text_muted)
            };
            if index == self.header_cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Cell::from(Span::styled(header_label(column.title, sorted), style))
        }));

        let view = self.page.rows();
        let rows = view.rows.iter().map(|record| {
            let style = if self.page.selection().is_selected(record.id()) {
                Style::default().fg(self.theme.secondary)
            } else {
                Style::default().fg(self.theme.text)
            };
            Row::new(
                columns
                    .iter()
                    .map(|column| Cell::from(record.value(column.field).to_display_string())),
            )
            .style(style)
        });

        let widths: Vec<Constraint> = columns
            .iter()
            .map(|column| Constraint::Percentage(column.width))
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .highlight_style(self.theme.selected_row())
            .highlight_symbol("> ");

        let mut state = TableState::default();
        state.select(Some(self.page.cursor()));
        f.render_stateful_widget(table, area, &mut state);
    }
}
