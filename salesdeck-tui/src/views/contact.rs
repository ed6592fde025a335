//! Contacts page.

use crate::state::App;
use crate::views::helpers::{meeting_lines, render_list};
use crate::widgets::{or_dash, render_empty_detail, DetailPanel, DetailSection};
use ratatui::{layout::Rect, style::Style, Frame};
use salesdeck_core::Contact;

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let detail_area = render_list(f, app, area, &app.contacts, "Contacts");
    match app.contacts.detail() {
        Some(contact) => render_detail(f, app, detail_area, contact),
        None => render_empty_detail(f, detail_area, Style::default().fg(app.theme.text_dim)),
    }
}

fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect, contact: &Contact) {
    let meetings = meeting_lines(&app.dataset.meetings_for_contact(&contact.id));
    let detail = DetailPanel {
        title: &contact.name,
        fields: vec![
            ("Title", or_dash(contact.title.as_deref())),
            ("Company", or_dash(contact.company_name.as_deref())),
            ("Email", or_dash(contact.email.as_deref())),
            ("Phone", or_dash(contact.phone.as_deref())),
            ("Profile", or_dash(contact.customer_profile.as_deref())),
            ("Last meeting", or_dash(contact.last_meeting.as_deref())),
            ("Next meeting", or_dash(contact.next_meeting.as_deref())),
        ],
        sections: vec![DetailSection {
            title: "Meetings",
            lines: meetings,
        }],
        label_style: Style::default().fg(app.theme.secondary),
        border_style: app.theme.border_style(false),
    };
    detail.render(f, area);
}
