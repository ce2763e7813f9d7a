// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search dialog as a state machine.
//!
//! Rendering lives in the page. This is everything the page asks about: is
//! the dialog open, what's typed, what to show, where to go on selection.
//! Every event is a method, every method is synchronous, and the visible
//! state is derived rather than stored, so it can't drift out of sync with
//! the query or the load status.
//!
//! ```text
//!            Cmd/Ctrl+K, open()
//!   Closed ─────────────────────▶ Empty ◀──── clear(), blank input
//!     ▲                             │
//!     │ dismiss(), select(i)        │ input(text)
//!     │                             ▼
//!     └──────────── Loading ──▶ Results / NoResults
//!                        index_loaded()
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::POST_ROUTE_PREFIX;
use crate::error::Result;
use crate::search::{SearchHit, SearchOptions, DEFAULT_LIMIT};

use super::SearchClient;

/// Key that, with Cmd or Ctrl held, opens the dialog.
pub const SHORTCUT_KEY: &str = "k";

/// What the dialog is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DialogState {
    Closed,
    /// Open, nothing typed yet. Shows the "start typing" hint.
    Empty,
    /// Something typed, index not here yet.
    Loading,
    Results,
    NoResults,
}

impl DialogState {
    pub fn as_str(self) -> &'static str {
        match self {
            DialogState::Closed => "closed",
            DialogState::Empty => "empty",
            DialogState::Loading => "loading",
            DialogState::Results => "results",
            DialogState::NoResults => "noResults",
        }
    }
}

/// The subset of a keyboard event the dialog cares about.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyPress {
    pub key: String,
    pub meta: bool,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        KeyPress {
            key: key.into(),
            ..KeyPress::default()
        }
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    fn is_open_shortcut(&self) -> bool {
        (self.meta || self.ctrl) && self.key == SHORTCUT_KEY
    }

    fn is_escape(&self) -> bool {
        self.key == "Escape"
    }
}

/// Where selecting a result takes the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub path: String,
}

/// Everything the dialog needs from its surroundings, passed in once.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogConfig {
    /// Route posts live under; a hit for `slug` navigates to `<prefix>/<slug>`.
    pub route_prefix: String,
    pub limit: usize,
    pub options: SearchOptions,
}

impl Default for DialogConfig {
    fn default() -> Self {
        DialogConfig {
            route_prefix: POST_ROUTE_PREFIX.to_string(),
            limit: DEFAULT_LIMIT,
            options: SearchOptions::default(),
        }
    }
}

impl DialogConfig {
    pub fn with_route_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.route_prefix = prefix.into();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Debug)]
pub struct SearchDialog {
    route_prefix: String,
    client: SearchClient,
    mounted: bool,
    open: bool,
    query: String,
    results: Vec<SearchHit>,
}

impl Default for SearchDialog {
    fn default() -> Self {
        SearchDialog::new(DialogConfig::default())
    }
}

impl SearchDialog {
    pub fn new(config: DialogConfig) -> Self {
        let DialogConfig {
            route_prefix,
            limit,
            mut options,
        } = config;
        options.limit = limit;
        SearchDialog {
            route_prefix,
            client: SearchClient::new(options),
            mounted: false,
            open: false,
            query: String::new(),
            results: Vec::new(),
        }
    }

    pub fn state(&self) -> DialogState {
        if !self.open {
            DialogState::Closed
        } else if self.query.trim().is_empty() {
            DialogState::Empty
        } else if self.client.is_loading() {
            DialogState::Loading
        } else if self.results.is_empty() {
            DialogState::NoResults
        } else {
            DialogState::Results
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    /// First client-side render finished; the keyboard shortcut goes live.
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Handle a document-level key press. Returns true when the key was
    /// consumed and the caller should suppress the browser default.
    pub fn key_down(&mut self, key: &KeyPress) -> bool {
        if !self.mounted {
            return false;
        }
        if key.is_open_shortcut() {
            if !self.open {
                self.open();
            }
            return true;
        }
        if self.open && key.is_escape() {
            self.dismiss();
            return true;
        }
        false
    }

    /// Open with a fresh query. Opening an already-open dialog resets it too.
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.results.clear();
    }

    /// The input field changed. The latest call always wins.
    pub fn input(&mut self, text: &str) {
        self.query.clear();
        self.query.push_str(text);
        self.refresh();
    }

    /// The artifact fetch finished, one way or the other.
    pub fn index_loaded(&mut self, fetched: Result<Vec<u8>>) {
        if self.client.complete_load(fetched) && self.open {
            self.refresh();
        }
    }

    /// Clear button: empty the query, stay open.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Pick the `position`-th result. Out of range does nothing.
    pub fn select(&mut self, position: usize) -> Option<Navigation> {
        let hit = self.results.get(position)?;
        let navigation = Navigation {
            path: hit.path_under(&self.route_prefix),
        };
        debug!(path = %navigation.path, "search result selected");
        self.open = false;
        self.query.clear();
        self.results.clear();
        Some(navigation)
    }

    fn refresh(&mut self) {
        self.results = if self.query.trim().is_empty() {
            Vec::new()
        } else {
            self.client.search(&self.query)
        };
    }
}
