use salesdeck_core::{Dataset, Entity};
use salesdeck_test_utils::fixtures::{numbered_companies, sample_dataset};
use salesdeck_tui::config::{SelectionMode, ThemeConfig, TuiConfig};
use salesdeck_tui::keys::{Action, InputMode};
use salesdeck_tui::nav::View;
use salesdeck_tui::notifications::NotificationLevel;
use salesdeck_tui::state::App;

fn config(mode: SelectionMode) -> TuiConfig {
    TuiConfig {
        data_path: "data.json".into(),
        persistence_path: "ui.json".into(),
        log_path: "salesdeck.log".into(),
        rows_per_page: 25,
        rows_per_page_options: vec![10, 25, 50],
        tick_rate_ms: 250,
        selection_mode: mode,
        theme: ThemeConfig {
            name: "synthbrute".to_string(),
        },
    }
}

fn url_app() -> App {
    App::new(config(SelectionMode::Url), sample_dataset(), None).unwrap()
}

fn run(app: &mut App, actions: &[Action]) {
    for action in actions {
        assert!(!app.handle_action(*action));
    }
}

fn company_ids(app: &App) -> Vec<String> {
    app.companies
        .rows()
        .rows
        .iter()
        .map(|c| c.id().to_string())
        .collect()
}

#[test]
fn opening_and_closing_rows_walks_history() {
    let mut app = url_app();
    run(&mut app, &[Action::Confirm]);
    assert_eq!(app.history.current().to_string(), "/companies?company=c-1");

    run(&mut app, &[Action::Cancel]);
    assert_eq!(app.history.current().to_string(), "/companies");
    assert!(app.companies.detail().is_none());

    run(&mut app, &[Action::Back]);
    assert_eq!(app.companies.detail().map(|c| c.id.as_str()), Some("c-1"));
    run(&mut app, &[Action::Forward]);
    assert!(app.companies.detail().is_none());
}

#[test]
fn back_after_switching_pages_returns_to_the_open_record() {
    let mut app = url_app();
    run(&mut app, &[Action::Confirm, Action::SwitchView(2)]);
    assert_eq!(app.active_view, View::Deals);
    assert_eq!(app.history.current().to_string(), "/deals");

    run(&mut app, &[Action::Back]);
    assert_eq!(app.active_view, View::Companies);
    assert_eq!(app.companies.detail().map(|c| c.id.as_str()), Some("c-1"));
}

#[test]
fn url_selection_belongs_to_the_location() {
    let mut app = url_app();
    run(
        &mut app,
        &[Action::Confirm, Action::SwitchView(1), Action::SwitchView(0)],
    );
    assert_eq!(app.history.current().to_string(), "/companies");
    assert!(app.companies.detail().is_none());
}

#[test]
fn memory_selection_survives_page_switches() {
    let mut app = App::new(config(SelectionMode::Memory), sample_dataset(), None).unwrap();
    run(
        &mut app,
        &[Action::Confirm, Action::SwitchView(1), Action::SwitchView(0)],
    );
    assert_eq!(app.history.current().to_string(), "/companies");
    assert_eq!(app.companies.detail().map(|c| c.id.as_str()), Some("c-1"));
}

#[test]
fn typing_a_search_filters_without_quitting() {
    let mut app = url_app();
    run(&mut app, &[Action::OpenSearch]);
    assert_eq!(app.mode, InputMode::Search);
    for c in "glob".chars() {
        run(&mut app, &[Action::SearchInput(c)]);
    }
    assert_eq!(company_ids(&app), vec!["c-2"]);

    run(&mut app, &[Action::SearchBackspace, Action::Cancel]);
    assert_eq!(app.mode, InputMode::Rows);
    assert_eq!(app.companies.pipeline().filters().search(), "glo");
}

#[test]
fn search_resets_to_the_first_page() {
    let dataset = Dataset {
        companies: numbered_companies(30),
        ..Dataset::default()
    };
    let mut app = App::new(config(SelectionMode::Url), dataset, None).unwrap();
    run(&mut app, &[Action::FewerRows, Action::NextPage]);
    assert_eq!(app.companies.pipeline().page(), 1);

    run(&mut app, &[Action::OpenSearch, Action::SearchInput('0')]);
    assert_eq!(app.companies.pipeline().page(), 0);
}

#[test]
fn stage_filter_toggles_from_the_filter_bar() {
    let mut app = url_app();
    run(&mut app, &[Action::SwitchView(2), Action::FocusFilters]);
    assert_eq!(app.mode, InputMode::Filters);

    // First option is "First meeting scheduled": nothing matches.
    run(&mut app, &[Action::ToggleOption]);
    assert!(app.deals.is_empty_state());

    run(&mut app, &[Action::MoveRight, Action::Confirm]);
    let ids: Vec<&str> = app.deals.rows().rows.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["d-2"]);

    run(&mut app, &[Action::ClearFilters]);
    assert_eq!(app.deals.pipeline().filtered_count(), 2);
}

#[test]
fn single_select_filter_toggles_back_to_any() {
    let mut app = url_app();
    run(&mut app, &[Action::FocusFilters, Action::ToggleOption]);
    assert_eq!(company_ids(&app), vec!["c-1"]);
    run(&mut app, &[Action::ToggleOption]);
    assert_eq!(company_ids(&app), vec!["c-1", "c-2"]);
}

#[test]
fn sorting_by_last_meeting_keeps_missing_dates_last() {
    let mut app = url_app();
    run(&mut app, &[Action::MoveRight; 4]);
    assert_eq!(app.header_cursor, 4);

    run(&mut app, &[Action::SortColumn]);
    assert_eq!(company_ids(&app), vec!["c-1", "c-2"]);
    run(&mut app, &[Action::SortColumn]);
    assert_eq!(company_ids(&app), vec!["c-1", "c-2"]);
}

#[test]
fn sorting_a_static_column_warns() {
    let mut app = url_app();
    run(&mut app, &[Action::SwitchView(1)]);
    run(&mut app, &[Action::MoveRight; 3]);
    run(&mut app, &[Action::SortColumn]);
    let note = app.notifications.last().unwrap();
    assert_eq!(note.level, NotificationLevel::Warning);
}

#[test]
fn rows_per_page_steps_through_configured_options() {
    let mut app = url_app();
    run(&mut app, &[Action::MoreRows]);
    assert_eq!(app.companies.pipeline().rows_per_page(), 50);
    run(&mut app, &[Action::MoreRows]);
    assert_eq!(app.companies.pipeline().rows_per_page(), 50);
    run(&mut app, &[Action::FewerRows, Action::FewerRows, Action::FewerRows]);
    assert_eq!(app.companies.pipeline().rows_per_page(), 10);
}

#[test]
fn board_toggle_only_applies_to_deals() {
    let mut app = url_app();
    run(&mut app, &[Action::ToggleBoard]);
    assert!(!app.board_visible);
    run(&mut app, &[Action::SwitchView(2), Action::ToggleBoard]);
    assert!(app.board_visible);
}

#[test]
fn filter_focus_enters_and_leaves() {
    let dataset = Dataset {
        companies: numbered_companies(3),
        ..Dataset::default()
    };
    let mut app = App::new(config(SelectionMode::Url), dataset, None).unwrap();
    run(&mut app, &[Action::FocusFilters]);
    assert_eq!(app.mode, InputMode::Filters);
    run(&mut app, &[Action::Cancel]);
    assert_eq!(app.mode, InputMode::Rows);
}
