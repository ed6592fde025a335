//! Common view rendering helpers.
//!
//! Every page has the same master-detail layout: filter bar, table and
//! pagination footer on the left, detail panel on the right.

use crate::keys::InputMode;
use crate::state::App;
use crate::widgets::{FilterBar, FilterGroup, FilterOption, ListTable, PaginationFooter};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    Frame,
};
use salesdeck_core::{Entity, ListPage, Meeting, RankedEnum};

/// Split `area` into the list column and the detail column.
pub fn two_column(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Filter bar contents for `page`: every declared filter with its options
/// and which of them are selected.
pub fn filter_groups<E: Entity>(page: &ListPage<E>) -> Vec<FilterGroup> {
    let pipeline = page.pipeline();
    pipeline
        .config()
        .filters()
        .iter()
        .map(|spec| {
            let selection = pipeline.filters().selection(spec.field);
            FilterGroup {
                label: spec.label,
                options: spec
                    .options_for(pipeline.source())
                    .into_iter()
                    .map(|label| FilterOption {
                        active: selection.is_some_and(|s| s.contains(&label)),
                        label,
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Filter bar over `area`; returns what is left below it.
pub fn render_filter_bar<E: Entity>(
    f: &mut Frame<'_>,
    app: &App,
    area: Rect,
    page: &ListPage<E>,
) -> Rect {
    let groups = filter_groups(page);
    let cursor = (app.mode == InputMode::Filters)
        .then_some((app.filter_cursor.filter, app.filter_cursor.option));
    let bar = FilterBar {
        search: page.pipeline().filters().search(),
        searching: app.mode == InputMode::Search,
        groups: &groups,
        cursor,
        active_style: Style::default().fg(app.theme.primary),
        inactive_style: Style::default().fg(app.theme.text_dim),
        cursor_style: Style::default()
            .fg(app.theme.secondary)
            .add_modifier(Modifier::REVERSED),
        border_style: app.theme.border_style(app.mode != InputMode::Rows),
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(bar.height()), Constraint::Min(0)])
        .split(area);
    bar.render(f, chunks[0]);
    chunks[1]
}

/// Filter bar, table and footer for `page`. Returns the detail area.
pub fn render_list<E: Entity>(
    f: &mut Frame<'_>,
    app: &App,
    area: Rect,
    page: &ListPage<E>,
    title: &str,
) -> Rect {
    let (list_area, detail_area) = two_column(area, 60);
    let below_filters = render_filter_bar(f, app, list_area, page);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(below_filters);

    let table = ListTable {
        title,
        page,
        header_cursor: app.header_cursor,
        focused: app.mode == InputMode::Rows,
        theme: &app.theme,
    };
    table.render(f, chunks[0]);

    let footer = PaginationFooter::from_view(&page.rows(), Style::default().fg(app.theme.text_dim));
    footer.render(f, chunks[1]);

    detail_area
}

/// One line per meeting: date, title and kind.
pub fn meeting_lines(meetings: &[&Meeting]) -> Vec<String> {
    meetings
        .iter()
        .map(|meeting| {
            let when = meeting.scheduled_at.as_deref().unwrap_or("unscheduled");
            match meeting.kind {
                Some(kind) => format!("{}  {} ({})", when, meeting.title, kind.label()),
                None => format!("{}  {}", when, meeting.title),
            }
        })
        .collect()
}

pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("{:.0}", value),
        None => "-".to_string(),
    }
}
