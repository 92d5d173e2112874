use crate::config::RenderSettings;
use crate::domain::{Catalog, Game};
use crate::services::query::{QueryState, StatusFilter};
use crate::services::render::render_page;
use crate::services::statistics::Statistics;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The search box text changed.
    Input(String),
    /// One of the three status buttons was pressed.
    Filter(StatusFilter),
    /// Enter in the search box.
    Commit,
}

/// Result of a refresh: the games on screen and the page showing them.
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub visible: Vec<&'a Game>,
    pub html: String,
}

/// Holds the search/filter state for one catalog and re-renders on change.
pub struct Controller<'a> {
    catalog: &'a Catalog,
    settings: RenderSettings,
    stats: Statistics<'a>,
    state: QueryState,
    focused: bool,
}

impl<'a> Controller<'a> {
    pub fn new(catalog: &'a Catalog, settings: RenderSettings) -> Self {
        let stats = Statistics::compute(catalog.games(), settings.top_count);
        Self {
            catalog,
            settings,
            stats,
            state: QueryState::default(),
            focused: false,
        }
    }

    pub fn with_state(mut self, state: QueryState) -> Self {
        self.state = state;
        self
    }

    pub fn set_query(&mut self, text: &str) {
        self.state.query = text.to_lowercase();
    }

    pub fn set_filter(&mut self, status: StatusFilter) {
        self.state.status = status;
    }

    pub fn refresh(&self) -> View<'a> {
        let visible = self.state.apply(self.catalog.games());
        debug!(
            "Refreshed view: query={:?} status={} matches={}",
            self.state.query,
            self.state.status,
            visible.len()
        );
        let html = render_page(&self.settings, &self.stats, &self.state, &visible);
        View { visible, html }
    }

    /// Applies an input event. Returns the new view when the event changed
    /// what is shown.
    pub fn handle(&mut self, event: ControllerEvent) -> Option<View<'a>> {
        match event {
            ControllerEvent::Input(text) => {
                self.focused = true;
                self.set_query(&text);
                Some(self.refresh())
            }
            ControllerEvent::Filter(status) => {
                self.set_filter(status);
                Some(self.refresh())
            }
            ControllerEvent::Commit => {
                self.focused = false;
                None
            }
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn stats(&self) -> &Statistics<'a> {
        &self.stats
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}
