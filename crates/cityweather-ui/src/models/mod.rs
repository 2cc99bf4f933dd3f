pub mod city_table;
pub mod detail_model;

pub use city_table::{CityTableModel, TableEffect, Viewport};
pub use detail_model::DetailModel;

use cityweather_cities::PageCursor;
use cityweather_core::{UiConfig, ViewState};
use cityweather_weather::{Units, WeatherStore};

use crate::command::Command;
use crate::services::{CityServiceMessage, WeatherServiceMessage};

/// Work the event loop must carry out on the controller's behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage(PageCursor),
    FetchWeather(String),
    OpenExternal(String),
}

/// Front end settings resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    pub viewport_rows: usize,
    pub suggestion_limit: usize,
    pub detail_url_base: String,
    pub viewport_width: u32,
    pub narrow_width_threshold: u32,
    pub units: Units,
}

impl UiSettings {
    pub fn from_config(ui: &UiConfig, units: Units) -> Self {
        Self {
            viewport_rows: ui.viewport_rows,
            suggestion_limit: ui.suggestion_limit,
            detail_url_base: ui.detail_url_base.clone(),
            viewport_width: ui.viewport_width,
            narrow_width_threshold: ui.narrow_width_threshold,
            units,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self::from_config(&UiConfig::default(), Units::default())
    }
}

/// Page-level controller: owns the view state, both screens' models and the
/// weather store, and turns commands and service messages into effects.
#[derive(Debug)]
pub struct PageController {
    settings: UiSettings,
    view_state: ViewState,
    table: CityTableModel,
    detail: Option<DetailModel>,
    store: WeatherStore,
    notice: Option<String>,
}

impl PageController {
    pub fn new(settings: UiSettings) -> Self {
        let table = CityTableModel::new(
            settings.viewport_rows,
            settings.suggestion_limit,
            &settings.detail_url_base,
        );
        Self {
            settings,
            view_state: ViewState::default(),
            table,
            detail: None,
            store: WeatherStore::new(),
            notice: None,
        }
    }

    pub fn mount(&mut self) -> Vec<Effect> {
        let effects = self.table.mount();
        self.translate(effects)
    }

    /// Apply one user command. `Help` and `Quit` are handled by the event loop.
    pub fn handle_command(&mut self, command: Command) -> Vec<Effect> {
        self.notice = None;

        if !self.view_state.is_listing() {
            return self.handle_detail_command(command);
        }

        let effects = match command {
            Command::Search(term) => self.table.on_search_input(&term),
            Command::PickSuggestion(index) => self.table.on_suggestion_click(index),
            Command::Sort(key) => self.table.on_sort(key),
            Command::Scroll(delta) => self.table.scroll_by(delta),
            Command::Open(index) => self.table.on_row_primary(index),
            Command::Link(index) => self.table.on_row_secondary(index),
            Command::Refresh | Command::Help | Command::Quit => Vec::new(),
        };
        self.translate(effects)
    }

    fn handle_detail_command(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Refresh => match self.detail.as_mut() {
                Some(detail) => vec![Effect::FetchWeather(detail.begin_fetch())],
                None => Vec::new(),
            },
            Command::Help | Command::Quit => Vec::new(),
            other => {
                tracing::debug!(command = ?other, "Ignoring listing command on detail view");
                self.notice = Some("Only `refresh` and `quit` work here".to_string());
                Vec::new()
            }
        }
    }

    pub fn on_city_message(&mut self, message: CityServiceMessage) -> Vec<Effect> {
        match message {
            CityServiceMessage::PageDone { cursor, result } => {
                let effects = self.table.on_page_loaded(cursor, result);
                self.translate(effects)
            }
        }
    }

    pub fn on_weather_message(&mut self, message: WeatherServiceMessage) {
        match message {
            WeatherServiceMessage::FetchDone { city, result } => match self.detail.as_mut() {
                Some(detail) => detail.on_fetch_done(&city, result, &mut self.store),
                None => tracing::debug!(city = %city, "Weather result with no detail view"),
            },
        }
    }

    /// Map listing effects to controller effects, performing view transitions.
    fn translate(&mut self, effects: Vec<TableEffect>) -> Vec<Effect> {
        let mut out = Vec::with_capacity(effects.len());
        for effect in effects {
            match effect {
                TableEffect::FetchPage(cursor) => out.push(Effect::FetchPage(cursor)),
                TableEffect::OpenDetail(city) => {
                    if let Some(fetch) = self.open_detail(&city) {
                        out.push(fetch);
                    }
                }
                TableEffect::OpenExternal(link) => {
                    self.notice = Some(format!("Link: {}", link));
                    out.push(Effect::OpenExternal(link));
                }
            }
        }
        out
    }

    fn open_detail(&mut self, city: &str) -> Option<Effect> {
        if !self.view_state.is_listing() {
            return None;
        }
        tracing::info!(city = %city, "Opening weather detail");
        self.view_state = std::mem::take(&mut self.view_state).on_primary_select(city);
        let mut detail = DetailModel::new(city);
        let fetch = detail.begin_fetch();
        self.detail = Some(detail);
        Some(Effect::FetchWeather(fetch))
    }

    pub fn settings(&self) -> &UiSettings {
        &self.settings
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn table(&self) -> &CityTableModel {
        &self.table
    }

    pub fn detail(&self) -> Option<&DetailModel> {
        self.detail.as_ref()
    }

    /// Read access to the weather store.
    pub fn store(&self) -> &WeatherStore {
        &self.store
    }

    /// One-off message for the status line, cleared by the next command.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}
