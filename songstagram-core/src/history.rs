use serde::{Deserialize, Serialize};

use crate::view::{View, ViewState};

/// What happens to entries past the cursor when a new view is pushed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ForwardHistory {
    /// Forward entries stay in the log, the new view is appended after them.
    #[default]
    Preserve,
    /// Forward entries are dropped before appending, like a browser.
    Discard,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    Appended,
    Deduplicated,
}

/// Ordered log of visited views with a cursor pointing at the active one.
///
/// The log is never empty and `entries[i].position == i` for every entry.
#[derive(Clone, Debug)]
pub struct NavigationHistory {
    entries: Vec<ViewState>,
    cursor: usize,
    search_active: bool,
    forward: ForwardHistory,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::with_root(View::Home, ForwardHistory::default())
    }

    pub fn with_root(root: View, forward: ForwardHistory) -> Self {
        Self {
            entries: vec![ViewState {
                view: root,
                position: 0,
            }],
            cursor: 0,
            search_active: false,
            forward,
        }
    }

    pub fn current(&self) -> &ViewState {
        &self.entries[self.cursor]
    }

    pub fn push(&mut self, view: View) -> PushOutcome {
        if view.is_structured() && view == self.current().view {
            log::debug!("history: {} already active", view.full_title());
            return PushOutcome::Deduplicated;
        }
        if self.forward == ForwardHistory::Discard {
            self.entries.truncate(self.cursor + 1);
        }
        let position = self.entries.len();
        log::debug!("history: push {} at {}", view.full_title(), position);
        self.entries.push(ViewState { view, position });
        self.cursor = position;
        PushOutcome::Appended
    }

    /// Leaves search mode if it is active, otherwise steps the cursor back.
    /// Returns whether anything changed.
    pub fn back(&mut self) -> bool {
        if self.search_active {
            self.search_active = false;
            return true;
        }
        if self.is_at_start() {
            return false;
        }
        self.cursor -= 1;
        log::debug!("history: back to {}", self.cursor);
        true
    }

    pub fn back_by(&mut self, count: usize) -> bool {
        let mut moved = false;
        for _ in 0..count {
            if !self.back() {
                break;
            }
            moved = true;
        }
        moved
    }

    pub fn forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.cursor += 1;
        log::debug!("history: forward to {}", self.cursor);
        true
    }

    pub fn is_at_start(&self) -> bool {
        self.entries.len() == 1 || self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.entries.len() == 1 || self.cursor == self.entries.len() - 1
    }

    pub fn search_active(&self) -> bool {
        self.search_active
    }

    pub fn set_search_active(&mut self, active: bool) {
        self.search_active = active;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`, the log is seeded at construction and never shrinks
    /// below one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ViewState] {
        &self.entries
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}
