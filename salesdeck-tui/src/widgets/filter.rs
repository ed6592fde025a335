//! Filter bar widget: the search box plus one line per declared filter.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct FilterOption {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct FilterGroup {
    pub label: &'static str,
    pub options: Vec<FilterOption>,
}

pub struct FilterBar<'a> {
    pub search: &'a str,
    pub searching: bool,
    pub groups: &'a [FilterGroup],
    /// Highlighted (filter, option) while the bar has focus.
    pub cursor: Option<(usize, usize)>,
    pub active_style: Style,
    pub inactive_style: Style,
    pub cursor_style: Style,
    pub border_style: Style,
}

impl<'a> FilterBar<'a> {
    /// Rows needed including borders.
    pub fn height(&self) -> u16 {
        3 + self.groups.len() as u16
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let caret = if self.searching { "_" } else { "" };
        let mut lines = vec![Line::from(vec![
            Span::styled("Search: ", self.inactive_style),
            Span::styled(format!("{}{}", self.search, caret), self.active_style),
        ])];

        for (group_index, group) in self.groups.iter().enumerate() {
            let mut spans = vec![Span::styled(format!("{}: ", group.label), self.inactive_style)];
            for (option_index, option) in group.options.iter().enumerate() {
                let marker = if option.active { "[x]" } else { "[ ]" };
                let style = if self.cursor == Some((group_index, option_index)) {
                    self.cursor_style
                } else if option.active {
                    self.active_style
                } else {
                    self.inactive_style
                };
                spans.push(Span::styled(format!("{} {} ", marker, option.label), style));
            }
            lines.push(Line::from(spans));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title("Filters [/ search, f filters, c clear]")
                .borders(Borders::ALL)
                .border_style(self.border_style),
        );
        f.render_widget(paragraph, area);
    }
}
