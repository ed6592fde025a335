//! Deals page: table or stage board.

use crate::state::App;
use crate::theme::deal_stage_color;
use crate::views::helpers::{format_amount, render_filter_bar, render_list, two_column};
use crate::widgets::{or_dash, render_empty_detail, Board, BoardColumn, DetailPanel};
use ratatui::{layout::Rect, style::Style, Frame};
use salesdeck_core::{Deal, DealField, DealStage, RankedEnum, DEAL_STAGE_RANK};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let detail_area = if app.board_visible {
        render_board(f, app, area)
    } else {
        render_list(f, app, area, &app.deals, "Deals [b board]")
    };
    match app.deals.detail() {
        Some(deal) => render_detail(f, app, detail_area, deal),
        None => render_empty_detail(f, detail_area, Style::default().fg(app.theme.text_dim)),
    }
}

/// Every filtered deal, across all pages, in one column per stage.
fn render_board(f: &mut Frame<'_>, app: &App, area: Rect) -> Rect {
    let (board_area, detail_area) = two_column(area, 70);
    let board_area = render_filter_bar(f, app, board_area, &app.deals);

    let columns: Vec<BoardColumn> = app
        .deals
        .pipeline()
        .grouped_by(DealField::Stage, &DEAL_STAGE_RANK)
        .into_iter()
        .map(|group| {
            let color = DealStage::from_label(&group.label)
                .map(|stage| deal_stage_color(stage, &app.theme))
                .unwrap_or(app.theme.text_dim);
            BoardColumn {
                title: group.label,
                cards: group
                    .records
                    .iter()
                    .map(|deal| format!("{} {}", deal.name, format_amount(deal.amount)))
                    .collect(),
                style: Style::default().fg(color),
            }
        })
        .collect();

    let board = Board {
        columns: &columns,
        card_style: Style::default().fg(app.theme.text),
        border_style: app.theme.border_style(true),
    };
    board.render(f, board_area);
    detail_area
}

fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect, deal: &Deal) {
    let detail = DetailPanel {
        title: &deal.name,
        fields: vec![
            ("Company", or_dash(deal.company_name.as_deref())),
            ("Stage", deal.stage_name.label().to_string()),
            ("Amount", format_amount(deal.amount)),
            ("Close date", or_dash(deal.close_date.as_deref())),
            ("Owner", or_dash(deal.owner.as_deref())),
            ("Next step", or_dash(deal.next_step.as_deref())),
        ],
        sections: Vec::new(),
        label_style: Style::default().fg(deal_stage_color(deal.stage_name, &app.theme)),
        border_style: app.theme.border_style(false),
    };
    detail.render(f, area);
}
