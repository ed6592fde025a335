//! Detail panel widget for showing field/value pairs.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// A titled list of lines below the fields, e.g. recent meetings.
pub struct DetailSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

pub struct DetailPanel<'a> {
    pub title: &'a str,
    pub fields: Vec<(&'a str, String)>,
    pub sections: Vec<DetailSection>,
    pub label_style: Style,
    pub border_style: Style,
}

impl<'a> DetailPanel<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = self
            .fields
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", label), self.label_style),
                    Span::raw(value.clone()),
                ])
            })
            .collect();

        for section in &self.sections {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(section.title, self.label_style)));
            if section.lines.is_empty() {
                lines.push(Line::raw("  (none)"));
            }
            lines.extend(section.lines.iter().map(|l| Line::raw(format!("  {}", l))));
        }

        let widget = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title(format!("{} [Esc closes]", self.title))
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}

/// Placeholder shown beside the table while nothing is selected.
pub fn render_empty_detail(f: &mut Frame<'_>, area: Rect, style: Style) {
    let widget = Paragraph::new("Select a row (Enter) to see its details.")
        .style(style)
        .block(Block::default().title("Details").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

/// `value`, or "-" for an absent field.
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
