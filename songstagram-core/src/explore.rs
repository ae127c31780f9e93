use std::sync::Arc;

use crate::{
    config::Config,
    history::{NavigationHistory, PushOutcome},
    link::SpotifyLink,
    view::{View, ViewState},
};

/// Result of a search term settling after the debounce window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Nothing to do, the term is blank and no search is showing.
    Idle,
    /// The term was cleared, search mode has been left.
    Dismissed,
    /// The term was a link, its view is now active.
    Opened(View),
    /// Search mode is active, results for this query should be fetched.
    Query(Arc<str>),
}

/// State of one explore panel: the view history and the search box.
///
/// The session is the only thing that mutates its history, callers drive it
/// from their event loop and load data for whatever view it reports.
pub struct ExploreSession {
    history: NavigationHistory,
    search_term: String,
}

impl ExploreSession {
    pub fn new(config: &Config) -> Self {
        Self {
            history: NavigationHistory::with_root(View::Home, config.forward_history),
            search_term: String::new(),
        }
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn current(&self) -> &ViewState {
        self.history.current()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_search_active(&self) -> bool {
        self.history.search_active()
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_at_start()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.history.is_at_end()
    }

    pub fn navigate(&mut self, view: View) -> &ViewState {
        if self.history.push(view) == PushOutcome::Appended {
            log::info!("navigated to {}", self.current().view.full_title());
        }
        self.reset_search();
        self.history.current()
    }

    pub fn navigate_back(&mut self) -> &ViewState {
        self.navigate_back_by(1)
    }

    pub fn navigate_back_by(&mut self, count: usize) -> &ViewState {
        let position = self.current().position;
        self.history.back_by(count);
        if self.current().position != position {
            self.reset_search();
        }
        self.history.current()
    }

    pub fn navigate_forward(&mut self) -> &ViewState {
        if self.history.forward() {
            self.reset_search();
        }
        self.history.current()
    }

    /// Returns the active view again so the caller reloads its data.
    pub fn refresh(&self) -> &ViewState {
        log::debug!("refreshing {}", self.current().view.full_title());
        self.history.current()
    }

    /// Records raw input from the search box. The caller debounces it and
    /// hands the settled value to `settle_search`.
    pub fn type_search(&mut self, term: &str) {
        self.search_term.clear();
        self.search_term.push_str(term);
    }

    pub fn settle_search(&mut self, term: &str) -> SearchOutcome {
        let term = term.trim();
        if term.is_empty() {
            return if self.history.search_active() {
                self.history.set_search_active(false);
                SearchOutcome::Dismissed
            } else {
                SearchOutcome::Idle
            };
        }
        if let Some(link) = SpotifyLink::parse(term) {
            let view = link.into_view();
            self.navigate(view.clone());
            return SearchOutcome::Opened(view);
        }
        log::debug!("searching for {:?}", term);
        self.history.set_search_active(true);
        SearchOutcome::Query(term.into())
    }

    /// Commits a query as its own history entry.
    pub fn submit_search(&mut self, query: &str) -> &ViewState {
        self.navigate(View::Search(query.trim().into()))
    }

    fn reset_search(&mut self) {
        self.search_term.clear();
        self.history.set_search_active(false);
    }
}
