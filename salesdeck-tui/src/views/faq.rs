//! FAQ page.

use crate::state::App;
use crate::views::helpers::render_list;
use crate::widgets::{or_dash, render_empty_detail, DetailPanel};
use ratatui::{layout::Rect, style::Style, Frame};
use salesdeck_core::{Faq, RankedEnum};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let detail_area = render_list(f, app, area, &app.faqs, "FAQs");
    match app.faqs.detail() {
        Some(faq) => render_detail(f, app, detail_area, faq),
        None => render_empty_detail(f, detail_area, Style::default().fg(app.theme.text_dim)),
    }
}

fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect, faq: &Faq) {
    let detail = DetailPanel {
        title: "FAQ",
        fields: vec![
            ("Question", faq.question.clone()),
            ("Category", faq.category.label().to_string()),
            ("Answer", or_dash(faq.answer.as_deref())),
        ],
        sections: Vec::new(),
        label_style: Style::default().fg(app.theme.secondary),
        border_style: app.theme.border_style(false),
    };
    detail.render(f, area);
}
