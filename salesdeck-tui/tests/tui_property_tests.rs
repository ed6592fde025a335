use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;
use salesdeck_test_utils::fixtures::sample_dataset;
use salesdeck_test_utils::generators::{arb_companies, arb_deals};
use salesdeck_tui::config::{ConfigError, SelectionMode, ThemeConfig, TuiConfig};
use salesdeck_tui::keys::{map_key, Action, InputMode};
use salesdeck_tui::nav::View;
use salesdeck_tui::persistence::{self, PersistedState};
use salesdeck_tui::state::App;
use salesdeck_core::{Dataset, Location};
use std::io::Write;

fn base_config() -> TuiConfig {
    TuiConfig {
        data_path: "demos/sample-data.json".into(),
        persistence_path: "tmp/salesdeck-ui.json".into(),
        log_path: "tmp/salesdeck-tui.log".into(),
        rows_per_page: 25,
        rows_per_page_options: vec![10, 25, 50],
        tick_rate_ms: 250,
        selection_mode: SelectionMode::Url,
        theme: ThemeConfig {
            name: "synthbrute".to_string(),
        },
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

const CONFIG_TOML: &str = r#"
data_path = "data.json"
persistence_path = "state/ui.json"
log_path = "salesdeck.log"
rows_per_page = 25
rows_per_page_options = [10, 25, 50]
tick_rate_ms = 250
selection_mode = "memory"

[theme]
name = "synthbrute"
"#;

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_parses_from_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("salesdeck.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(CONFIG_TOML.as_bytes()).unwrap();

    let config = TuiConfig::from_path(&path).unwrap();
    assert_eq!(config.selection_mode, SelectionMode::Memory);
    assert_eq!(config.rows_per_page_options, vec![10, 25, 50]);
    assert!(config.validate().is_ok());
}

#[test]
fn config_rejects_unknown_fields() {
    let toml = format!("colour = \"red\"\n{}", CONFIG_TOML);
    assert!(matches!(
        TuiConfig::from_toml_str(&toml),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn config_rejects_unknown_selection_mode() {
    let toml = CONFIG_TOML.replace("\"memory\"", "\"cookie\"");
    assert!(TuiConfig::from_toml_str(&toml).is_err());
}

#[test]
fn config_requires_synthbrute_theme() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_rows_per_page_among_options() {
    let mut config = base_config();
    config.rows_per_page = 30;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { field: "rows_per_page", .. })
    ));
}

#[test]
fn config_rejects_unordered_or_zero_options() {
    let mut config = base_config();
    config.rows_per_page_options = vec![25, 10];
    assert!(config.validate().is_err());
    config.rows_per_page_options = vec![0, 25];
    assert!(config.validate().is_err());
    config.rows_per_page_options = Vec::new();
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_zero_tick_rate() {
    let mut config = base_config();
    config.tick_rate_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn demo_config_and_dataset_load() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("..");
    let config = TuiConfig::from_path(&root.join("demos/salesdeck.toml")).unwrap();
    assert!(config.validate().is_ok());

    let dataset = Dataset::load(&root.join(&config.data_path)).unwrap();
    assert_eq!(dataset.deals.len(), 4);
    let app = App::new(config, dataset, None).unwrap();
    assert_eq!(app.companies.pipeline().filtered_count(), 4);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn persisted_state_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("ui.json");
    assert!(persistence::load(&path).unwrap().is_none());

    let state = PersistedState {
        active_view: View::Deals,
        location: Some("/deals?deal=d-1".to_string()),
    };
    persistence::save(&path, &state).unwrap();
    assert_eq!(persistence::load(&path).unwrap(), Some(state));
}

#[test]
fn corrupt_persisted_state_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ui.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(persistence::load(&path).is_err());
}

#[test]
fn start_location_falls_back_to_the_saved_page() {
    let state = PersistedState {
        active_view: View::Faqs,
        location: Some("/nowhere?faq=f-1".to_string()),
    };
    assert_eq!(state.start_location().to_string(), "/faqs");

    let state = PersistedState {
        active_view: View::Faqs,
        location: Some("/objections?objection=o-1".to_string()),
    };
    assert_eq!(state.start_location().to_string(), "/objections?objection=o-1");
}

#[test]
fn app_state_restores_route_and_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ui.json");

    let mut app = App::new(base_config(), sample_dataset(), None).unwrap();
    app.handle_action(Action::SwitchView(2));
    app.handle_action(Action::Confirm);
    persistence::save(&path, &app.persisted_state()).unwrap();

    let restored = persistence::load(&path).unwrap().map(|s| s.start_location());
    let app = App::new(base_config(), sample_dataset(), restored).unwrap();
    assert_eq!(app.active_view, View::Deals);
    assert!(app.deals.detail().is_some());
}

// ============================================================================
// Keybindings
// ============================================================================

#[test]
fn digits_past_the_last_page_do_nothing() {
    for ch in ['7', '8', '9', '0'] {
        assert!(map_key(key(KeyCode::Char(ch)), InputMode::Rows).is_none());
    }
}

proptest! {
    #[test]
    fn keybinding_digit_switches_view(digit in 1u8..=6u8) {
        let ch = char::from(b'0' + digit);
        let action = map_key(key(KeyCode::Char(ch)), InputMode::Rows);
        let expected = usize::from(digit - 1);
        prop_assert!(matches!(action, Some(Action::SwitchView(i)) if i == expected));
        prop_assert!(View::from_index(expected).is_some());
    }

    #[test]
    fn search_mode_turns_printable_keys_into_text(ch in proptest::char::range('a', 'z')) {
        prop_assert_eq!(
            map_key(key(KeyCode::Char(ch)), InputMode::Search),
            Some(Action::SearchInput(ch))
        );
    }

    #[test]
    fn valid_rows_per_page_options_pass_validation(
        options in prop::collection::btree_set(1usize..500, 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let options: Vec<usize> = options.into_iter().collect();
        let mut config = base_config();
        config.rows_per_page = options[pick.index(options.len())];
        config.rows_per_page_options = options;
        prop_assert!(config.validate().is_ok());
    }

    // ========================================================================
    // Any key sequence keeps the page consistent
    // ========================================================================

    #[test]
    fn arbitrary_key_sequences_keep_cursor_on_the_page(
        companies in arb_companies(40),
        deals in arb_deals(40),
        keys in prop::collection::vec(
            prop::sample::select(vec![
                KeyCode::Char('j'), KeyCode::Char('k'), KeyCode::Char('h'), KeyCode::Char('l'),
                KeyCode::Char('n'), KeyCode::Char('p'), KeyCode::Char('s'), KeyCode::Char('f'),
                KeyCode::Char(' '), KeyCode::Char('c'), KeyCode::Char('b'), KeyCode::Char('+'),
                KeyCode::Char('-'), KeyCode::Char('/'), KeyCode::Char('a'), KeyCode::Char('1'),
                KeyCode::Char('3'), KeyCode::Enter, KeyCode::Esc, KeyCode::Backspace, KeyCode::Tab,
            ]),
            0..60,
        ),
    ) {
        let dataset = Dataset { companies, deals, ..Dataset::default() };
        let mut app = App::new(base_config(), dataset, None).unwrap();
        for code in keys {
            if let Some(action) = map_key(key(code), app.mode) {
                prop_assert!(!app.handle_action(action));
            }
        }

        for view in [View::Companies, View::Deals] {
            let (cursor, rows, page, pages) = match view {
                View::Companies => {
                    let v = app.companies.rows();
                    (app.companies.cursor(), v.rows.len(), v.page, v.display_total_pages())
                }
                _ => {
                    let v = app.deals.rows();
                    (app.deals.cursor(), v.rows.len(), v.page, v.display_total_pages())
                }
            };
            prop_assert!(cursor < rows.max(1));
            prop_assert!(page < pages);
        }
        prop_assert_eq!(
            View::from_path(app.history.current().path()),
            Some(app.active_view)
        );
    }
}

#[test]
fn quit_key_ends_the_loop() {
    let mut app = App::new(base_config(), Dataset::default(), None).unwrap();
    let action = map_key(key(KeyCode::Char('q')), app.mode).unwrap();
    assert!(app.handle_action(action));
}

#[test]
fn deep_link_opens_its_page_and_record() {
    let app = App::new(
        base_config(),
        sample_dataset(),
        Some(Location::parse("/deals?deal=d-1")),
    )
    .unwrap();
    assert_eq!(app.active_view, View::Deals);
    assert_eq!(app.deals.detail().map(|d| d.id.as_str()), Some("d-1"));
}
