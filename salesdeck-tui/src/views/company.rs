//! Companies page.

use crate::state::App;
use crate::views::helpers::{meeting_lines, render_list};
use crate::widgets::{or_dash, render_empty_detail, DetailPanel, DetailSection};
use ratatui::{layout::Rect, style::Style, Frame};
use salesdeck_core::{Company, RankedEnum};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let detail_area = render_list(f, app, area, &app.companies, "Companies");
    match app.companies.detail() {
        Some(company) => render_detail(f, app, detail_area, company),
        None => render_empty_detail(f, detail_area, Style::default().fg(app.theme.text_dim)),
    }
}

fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect, company: &Company) {
    let contacts: Vec<String> = app
        .dataset
        .contacts_at(&company.id)
        .into_iter()
        .map(|c| match &c.title {
            Some(title) => format!("{} ({})", c.name, title),
            None => c.name.clone(),
        })
        .collect();
    let deals: Vec<String> = app
        .dataset
        .deals_for(&company.id)
        .into_iter()
        .map(|d| format!("{} [{}]", d.name, d.stage_name.label()))
        .collect();
    let meetings = meeting_lines(&app.dataset.meetings_for_company(&company.id));

    let detail = DetailPanel {
        title: &company.name,
        fields: vec![
            ("Domain", or_dash(company.domain.as_deref())),
            ("Industry", or_dash(company.industry.as_deref())),
            ("Profile", or_dash(company.customer_profile.as_deref())),
            (
                "Employees",
                company
                    .employee_count
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ("Owner", or_dash(company.owner.as_deref())),
            ("Last meeting", or_dash(company.last_meeting.as_deref())),
            ("Next meeting", or_dash(company.next_meeting.as_deref())),
            ("Notes", or_dash(company.notes.as_deref())),
        ],
        sections: vec![
            DetailSection { title: "Contacts", lines: contacts },
            DetailSection { title: "Deals", lines: deals },
            DetailSection { title: "Meetings", lines: meetings },
        ],
        label_style: Style::default().fg(app.theme.secondary),
        border_style: app.theme.border_style(false),
    };
    detail.render(f, area);
}
