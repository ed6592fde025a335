//! Objection handling page.

use crate::state::App;
use crate::views::helpers::render_list;
use crate::widgets::{or_dash, render_empty_detail, DetailPanel};
use ratatui::{layout::Rect, style::Style, Frame};
use salesdeck_core::{Objection, RankedEnum};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let detail_area = render_list(f, app, area, &app.objections, "Objections");
    match app.objections.detail() {
        Some(objection) => render_detail(f, app, detail_area, objection),
        None => render_empty_detail(f, detail_area, Style::default().fg(app.theme.text_dim)),
    }
}

fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect, objection: &Objection) {
    let detail = DetailPanel {
        title: "Objection",
        fields: vec![
            ("Objection", objection.objection.clone()),
            ("Category", objection.category.label().to_string()),
            (
                "Times heard",
                objection
                    .times_heard
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ("Response", or_dash(objection.response.as_deref())),
        ],
        sections: Vec::new(),
        label_style: Style::default().fg(app.theme.secondary),
        border_style: app.theme.border_style(false),
    };
    detail.render(f, area);
}
