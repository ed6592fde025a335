//! Discovery questions page.

use crate::state::App;
use crate::views::helpers::render_list;
use crate::widgets::{or_dash, render_empty_detail, DetailPanel};
use ratatui::{layout::Rect, style::Style, Frame};
use salesdeck_core::{DiscoveryQuestion, RankedEnum};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let detail_area = render_list(
        f,
        app,
        area,
        &app.discovery_questions,
        "Discovery questions",
    );
    match app.discovery_questions.detail() {
        Some(question) => render_detail(f, app, detail_area, question),
        None => render_empty_detail(f, detail_area, Style::default().fg(app.theme.text_dim)),
    }
}

fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect, question: &DiscoveryQuestion) {
    let relevant = if question.typically_relevant_for.is_empty() {
        "-".to_string()
    } else {
        question.typically_relevant_for.join(", ")
    };
    let detail = DetailPanel {
        title: "Discovery question",
        fields: vec![
            ("Question", question.question.clone()),
            ("Category", question.category.label().to_string()),
            ("Purpose", or_dash(question.purpose.as_deref())),
            ("Relevant for", relevant),
        ],
        sections: Vec::new(),
        label_style: Style::default().fg(app.theme.secondary),
        border_style: app.theme.border_style(false),
    };
    detail.render(f, area);
}
