//! Application state and key handling.

use crate::config::{SelectionMode, TuiConfig};
use crate::keys::{Action, InputMode};
use crate::nav::View;
use crate::notifications::{Notification, NotificationLevel};
use crate::persistence::PersistedState;
use crate::theme::SynthBruteTheme;
use crate::traits::ListControls;
use chrono::{DateTime, Utc};
use salesdeck_core::{
    pages, Company, Contact, Dataset, Deal, DiscoveryQuestion, Entity, Faq, History, ListConfig,
    ListPage, ListPipeline, ListResult, Location, MemorySelectionStore, Objection,
    SelectionController, SelectionStore, UrlSelectionStore,
};
use std::rc::Rc;

/// Highlighted position inside the filter bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterCursor {
    pub filter: usize,
    pub option: usize,
}

pub struct App {
    pub config: TuiConfig,
    pub theme: SynthBruteTheme,
    pub dataset: Dataset,
    pub history: History,
    pub active_view: View,

    pub companies: ListPage<Company>,
    pub contacts: ListPage<Contact>,
    pub deals: ListPage<Deal>,
    pub objections: ListPage<Objection>,
    pub faqs: ListPage<Faq>,
    pub discovery_questions: ListPage<DiscoveryQuestion>,

    pub mode: InputMode,
    /// Column the sort key acts on.
    pub header_cursor: usize,
    pub filter_cursor: FilterCursor,
    /// Deals rendered as one column per stage instead of a table.
    pub board_visible: bool,
    pub notifications: Vec<Notification>,
}

impl App {
    /// Build every page over `dataset`, starting at `start` (or the
    /// companies page).
    pub fn new(config: TuiConfig, dataset: Dataset, start: Option<Location>) -> ListResult<Self> {
        let location = start.unwrap_or_else(|| Location::new(View::Companies.route()));
        let active_view = View::from_path(location.path()).unwrap_or(View::Companies);
        let history = History::new(location);

        let rows = config.rows_per_page;
        let mode = config.selection_mode;
        let companies = build_page(
            pages::companies(),
            dataset.companies.clone(),
            View::Companies,
            &history,
            mode,
            rows,
        )?;
        let contacts = build_page(
            pages::contacts(),
            dataset.contacts.clone(),
            View::Contacts,
            &history,
            mode,
            rows,
        )?;
        let deals = build_page(
            pages::deals(),
            dataset.deals.clone(),
            View::Deals,
            &history,
            mode,
            rows,
        )?;
        let objections = build_page(
            pages::objections(),
            dataset.objections.clone(),
            View::Objections,
            &history,
            mode,
            rows,
        )?;
        let faqs = build_page(
            pages::faqs(),
            dataset.faqs.clone(),
            View::Faqs,
            &history,
            mode,
            rows,
        )?;
        let discovery_questions = build_page(
            pages::discovery_questions(),
            dataset.discovery_questions.clone(),
            View::DiscoveryQuestions,
            &history,
            mode,
            rows,
        )?;

        Ok(Self {
            theme: SynthBruteTheme::synthbrute(),
            config,
            dataset,
            history,
            active_view,
            companies,
            contacts,
            deals,
            objections,
            faqs,
            discovery_questions,
            mode: InputMode::Rows,
            header_cursor: 0,
            filter_cursor: FilterCursor::default(),
            board_visible: false,
            notifications: Vec::new(),
        })
    }

    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            active_view: self.active_view,
            location: Some(self.history.current().to_string()),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn expire_notifications(&mut self, now: DateTime<Utc>) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    pub fn active_list(&self) -> &dyn ListControls {
        match self.active_view {
            View::Companies => &self.companies,
            View::Contacts => &self.contacts,
            View::Deals => &self.deals,
            View::Objections => &self.objections,
            View::Faqs => &self.faqs,
            View::DiscoveryQuestions => &self.discovery_questions,
        }
    }

    pub fn active_list_mut(&mut self) -> &mut dyn ListControls {
        match self.active_view {
            View::Companies => &mut self.companies,
            View::Contacts => &mut self.contacts,
            View::Deals => &mut self.deals,
            View::Objections => &mut self.objections,
            View::Faqs => &mut self.faqs,
            View::DiscoveryQuestions => &mut self.discovery_questions,
        }
    }

    /// Apply one key action. Returns true when the app should exit.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::NextView => self.switch_view(self.active_view.next()),
            Action::PrevView => self.switch_view(self.active_view.previous()),
            Action::SwitchView(index) => {
                if let Some(view) = View::from_index(index) {
                    self.switch_view(view);
                }
            }
            Action::MoveUp => self.move_vertical(-1),
            Action::MoveDown => self.move_vertical(1),
            Action::MoveLeft => self.move_horizontal(-1),
            Action::MoveRight => self.move_horizontal(1),
            Action::Confirm => match self.mode {
                InputMode::Filters => self.toggle_highlighted_option(),
                _ => {
                    self.active_list_mut().open_cursor();
                }
            },
            Action::Cancel => match self.mode {
                InputMode::Rows => self.active_list_mut().close_detail(),
                InputMode::Filters | InputMode::Search => self.mode = InputMode::Rows,
            },
            Action::OpenSearch => self.mode = InputMode::Search,
            Action::SearchInput(c) => {
                let mut text = self.active_list().search().to_string();
                text.push(c);
                self.active_list_mut().set_search(&text);
            }
            Action::SearchBackspace => {
                let mut text = self.active_list().search().to_string();
                text.pop();
                self.active_list_mut().set_search(&text);
            }
            Action::SortColumn => {
                let column = self.header_cursor;
                if let Err(err) = self.active_list_mut().sort_by_column(column) {
                    self.notify(NotificationLevel::Warning, err.to_string());
                }
            }
            Action::NextPage => self.active_list_mut().next_page(),
            Action::PrevPage => self.active_list_mut().prev_page(),
            Action::MoreRows => self.step_rows_per_page(true),
            Action::FewerRows => self.step_rows_per_page(false),
            Action::FocusFilters => {
                self.mode = if self.mode == InputMode::Filters {
                    InputMode::Rows
                } else if self.active_list().filter_count() > 0 {
                    InputMode::Filters
                } else {
                    self.notify(NotificationLevel::Info, "This page has no filters");
                    InputMode::Rows
                };
            }
            Action::ToggleOption => {
                if self.mode == InputMode::Filters {
                    self.toggle_highlighted_option();
                }
            }
            Action::ClearFilters => {
                self.active_list_mut().clear_filters();
                tracing::debug!(view = self.active_view.title(), "filters cleared");
            }
            Action::ToggleBoard => {
                if self.active_view == View::Deals {
                    self.board_visible = !self.board_visible;
                }
            }
            Action::Back => {
                if self.history.back() {
                    self.follow_location();
                }
            }
            Action::Forward => {
                if self.history.forward() {
                    self.follow_location();
                }
            }
        }
        false
    }

    /// Switch pages by pushing the page's route.
    pub fn switch_view(&mut self, view: View) {
        if view == self.active_view {
            return;
        }
        if View::from_path(self.history.current().path()) != Some(view) {
            self.history.push(Location::new(view.route()));
        }
        self.enter_view(view);
    }

    fn enter_view(&mut self, view: View) {
        tracing::debug!(from = self.active_view.title(), to = view.title(), "view switched");
        self.active_view = view;
        self.active_list().resync_selection();
        self.mode = InputMode::Rows;
        self.header_cursor = 0;
        self.filter_cursor = FilterCursor::default();
    }

    /// After back/forward, show the page the location points at.
    fn follow_location(&mut self) {
        if let Some(view) = View::from_path(self.history.current().path()) {
            if view != self.active_view {
                self.enter_view(view);
            }
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        match self.mode {
            InputMode::Filters => {
                let count = self.active_list().filter_count();
                if count == 0 {
                    return;
                }
                let next = self.filter_cursor.filter as isize + delta;
                self.filter_cursor = FilterCursor {
                    filter: next.rem_euclid(count as isize) as usize,
                    option: 0,
                };
            }
            _ => self.active_list_mut().move_cursor(delta),
        }
    }

    fn move_horizontal(&mut self, delta: isize) {
        match self.mode {
            InputMode::Filters => {
                let count = self
                    .active_list()
                    .filter_options(self.filter_cursor.filter)
                    .len();
                if count == 0 {
                    return;
                }
                let next = self.filter_cursor.option as isize + delta;
                self.filter_cursor.option = next.rem_euclid(count as isize) as usize;
            }
            _ => {
                let count = self.active_list().column_count();
                if count == 0 {
                    return;
                }
                let next = self.header_cursor as isize + delta;
                self.header_cursor = next.clamp(0, count as isize - 1) as usize;
            }
        }
    }

    fn toggle_highlighted_option(&mut self) {
        let FilterCursor { filter, option } = self.filter_cursor;
        let options = self.active_list().filter_options(filter);
        let Some(value) = options.get(option) else {
            return;
        };
        if let Err(err) = self.active_list_mut().toggle_filter_option(filter, value) {
            tracing::warn!(error = %err, "filter toggle rejected");
            self.notify(NotificationLevel::Error, err.to_string());
        }
    }

    /// Move to the next larger (or smaller) configured rows-per-page option.
    fn step_rows_per_page(&mut self, larger: bool) {
        let current = self.active_list().rows_per_page();
        let options = &self.config.rows_per_page_options;
        let next = if larger {
            options.iter().copied().find(|&rows| rows > current)
        } else {
            options.iter().rev().copied().find(|&rows| rows < current)
        };
        if let Some(rows) = next {
            if let Err(err) = self.active_list_mut().set_rows_per_page(rows) {
                self.notify(NotificationLevel::Error, err.to_string());
            }
        }
    }
}

fn build_page<E: Entity>(
    config: ListConfig<E::Field>,
    source: Vec<E>,
    view: View,
    history: &History,
    mode: SelectionMode,
    rows_per_page: usize,
) -> ListResult<ListPage<E>> {
    let store: Rc<dyn SelectionStore> = match mode {
        SelectionMode::Url => Rc::new(UrlSelectionStore::new(
            history.clone(),
            view.selection_param(),
        )),
        SelectionMode::Memory => Rc::new(MemorySelectionStore::default()),
    };
    let mut pipeline = ListPipeline::new(config, source);
    pipeline.set_rows_per_page(rows_per_page)?;
    Ok(ListPage::new(
        pipeline,
        SelectionController::new(view.title(), store),
    ))
}
