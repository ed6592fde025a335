//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Row cursor and column headers.
    #[default]
    Rows,
    /// Filter bar: one filter at a time, one option at a time.
    Filters,
    /// Typing into the search box.
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    SwitchView(usize),
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Open the highlighted row, or toggle the highlighted filter option.
    Confirm,
    /// Close the detail panel, or leave the filter bar / search box.
    Cancel,
    OpenSearch,
    SearchInput(char),
    SearchBackspace,
    SortColumn,
    NextPage,
    PrevPage,
    MoreRows,
    FewerRows,
    FocusFilters,
    ToggleOption,
    ClearFilters,
    ToggleBoard,
    Back,
    Forward,
}

pub fn map_key(event: KeyEvent, mode: InputMode) -> Option<Action> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    if modifiers.contains(KeyModifiers::ALT) {
        return match code {
            KeyCode::Left => Some(Action::Back),
            KeyCode::Right => Some(Action::Forward),
            _ => None,
        };
    }

    if mode == InputMode::Search {
        return match code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('s') => Some(Action::SortColumn),
        KeyCode::Char('n') | KeyCode::PageDown => Some(Action::NextPage),
        KeyCode::Char('p') | KeyCode::PageUp => Some(Action::PrevPage),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::MoreRows),
        KeyCode::Char('-') => Some(Action::FewerRows),
        KeyCode::Char('f') => Some(Action::FocusFilters),
        KeyCode::Char(' ') => Some(Action::ToggleOption),
        KeyCode::Char('c') => Some(Action::ClearFilters),
        KeyCode::Char('b') => Some(Action::ToggleBoard),
        KeyCode::Backspace => Some(Action::Back),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let idx = match c {
                '1' => 0,
                '2' => 1,
                '3' => 2,
                '4' => 3,
                '5' => 4,
                '6' => 5,
                _ => return None,
            };
            Some(Action::SwitchView(idx))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn search_mode_captures_letters() {
        assert_eq!(
            map_key(key(KeyCode::Char('q')), InputMode::Search),
            Some(Action::SearchInput('q'))
        );
        assert_eq!(map_key(key(KeyCode::Char('q')), InputMode::Rows), Some(Action::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut event = key(KeyCode::Char('j'));
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event, InputMode::Rows), None);
    }

    #[test]
    fn alt_arrows_navigate_history() {
        let mut event = key(KeyCode::Left);
        event.modifiers = KeyModifiers::ALT;
        assert_eq!(map_key(event, InputMode::Search), Some(Action::Back));
        event.code = KeyCode::Right;
        assert_eq!(map_key(event, InputMode::Rows), Some(Action::Forward));
    }
}
