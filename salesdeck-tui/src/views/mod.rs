//! View rendering dispatch.

pub mod company;
pub mod contact;
pub mod deal;
pub mod discovery;
pub mod faq;
pub mod helpers;
pub mod objection;

pub use helpers::{render_list, two_column};

use crate::keys::InputMode;
use crate::nav::View;
use crate::state::App;
use crate::theme::notification_color;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_view {
        View::Companies => company::render(f, app, layout[1]),
        View::Contacts => contact::render(f, app, layout[1]),
        View::Deals => deal::render(f, app, layout[1]),
        View::Objections => objection::render(f, app, layout[1]),
        View::Faqs => faq::render(f, app, layout[1]),
        View::DiscoveryQuestions => discovery::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (index, view) in View::all().iter().enumerate() {
        let style = if *view == app.active_view {
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text_dim)
        };
        spans.push(Span::styled(format!(" {} {} ", index + 1, view.title()), style));
    }
    let title = format!("SALESDECK | {}", app.history.current());
    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().fg(app.theme.secondary))),
    );
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match app.mode {
        InputMode::Search => "type to search • Backspace delete • Enter/Esc done",
        InputMode::Filters => "j/k filter • h/l option • Space/Enter toggle • c clear • Esc back",
        InputMode::Rows => {
            "j/k move • Enter open • Esc close • h/l column • s sort • / search • f filters • Tab page • Backspace back • q quit"
        }
    };
    let (text, style) = match app.notifications.last() {
        Some(note) => (
            format!("{}: {}", note.level.label(), note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        ),
        None => (help.to_string(), Style::default().fg(app.theme.text_dim)),
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
