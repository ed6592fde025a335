//! Kanban board widget: one column per group, cards top to bottom.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct BoardColumn {
    pub title: String,
    pub cards: Vec<String>,
    pub style: Style,
}

pub struct Board<'a> {
    pub columns: &'a [BoardColumn],
    pub card_style: Style,
    pub border_style: Style,
}

impl<'a> Board<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        if self.columns.is_empty() {
            return;
        }
        let count = self.columns.len() as u32;
        let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
        let areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (column, column_area) in self.columns.iter().zip(areas.iter()) {
            let items: Vec<ListItem> = column
                .cards
                .iter()
                .map(|card| ListItem::new(Line::from(Span::styled(card.clone(), self.card_style))))
                .collect();
            let title = Span::styled(format!("{} ({})", column.title, column.cards.len()), column.style);
            let list = List::new(items).block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            );
            f.render_widget(list, *column_area);
        }
    }
}
