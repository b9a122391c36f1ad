// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search-as-you-type engine.
//!
//! One engine per page load. It starts in `Loading`, moves once to either
//! `Ready` or `Unavailable`, and never moves again:
//!
//! ```text
//!             index ok, non-empty
//!   Loading ────────────────────────▶ Ready      (every input: full pass)
//!      │
//!      │ fetch failed / bad JSON / empty index
//!      ▼
//!   Unavailable                                  (notice once, then inert)
//! ```
//!
//! Input that arrives while loading is dropped, not queued. Everything after
//! the index arrives is synchronous: a pass runs to completion, render
//! included, before the next input is looked at, so passes never interleave
//! and the last render is the one on screen.
//!
//! The results container is abstracted as [`ResultsView`]. The browser binding
//! implements it with a JS callback; tests implement it with a `Vec<String>`.

use crate::error::LoadError;
use crate::render::{render_notice, render_results, UNAVAILABLE_NOTICE};
use crate::search::{self, SearchOptions, SearchOutcome};
use crate::types::SearchIndex;

/// The element whose content each pass replaces.
pub trait ResultsView {
    /// Replace the container's entire content with `html`.
    fn replace_results(&mut self, html: &str);
}

/// Lifecycle of the loaded index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineState {
    Loading,
    Ready(SearchIndex),
    Unavailable,
}

impl EngineState {
    pub fn name(&self) -> &'static str {
        match self {
            EngineState::Loading => "loading",
            EngineState::Ready(_) => "ready",
            EngineState::Unavailable => "unavailable",
        }
    }
}

pub struct SearchEngine<V> {
    state: EngineState,
    options: SearchOptions,
    view: V,
}

impl<V: ResultsView> SearchEngine<V> {
    /// Attach an engine to the page.
    ///
    /// Both the query input and the results container must exist. If either
    /// is missing the engine disables itself and `None` is returned; the page
    /// is left untouched.
    pub fn attach(input_present: bool, view: Option<V>, options: SearchOptions) -> Option<Self> {
        match (input_present, view) {
            (true, Some(view)) => Some(Self {
                state: EngineState::Loading,
                options,
                view,
            }),
            (input, view) => {
                tracing::debug!(
                    input_present = input,
                    container_present = view.is_some(),
                    "search elements missing, engine disabled"
                );
                None
            }
        }
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Settle the index fetch. Only the first call has any effect.
    pub fn on_index_loaded(&mut self, outcome: Result<SearchIndex, LoadError>) {
        // INVARIANT: the state leaves Loading at most once
        if self.state != EngineState::Loading {
            tracing::debug!(state = self.state.name(), "index already settled, ignoring");
            return;
        }

        match outcome {
            Ok(index) if !index.is_empty() => {
                tracing::debug!(entries = index.len(), "search index ready");
                self.state = EngineState::Ready(index);
            }
            Ok(_) => {
                tracing::warn!("search index is empty");
                self.become_unavailable();
            }
            Err(e) => {
                tracing::warn!(error = %e, "search index failed to load");
                self.become_unavailable();
            }
        }
    }

    /// Settle the fetch from a raw response body.
    pub fn load_json(&mut self, body: &str) {
        self.on_index_loaded(SearchIndex::from_json(body));
    }

    /// Settle the fetch as failed.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.on_index_loaded(Err(LoadError::Fetch(reason.into())));
    }

    fn become_unavailable(&mut self) {
        self.state = EngineState::Unavailable;
        self.view.replace_results(&render_notice(UNAVAILABLE_NOTICE));
    }

    /// Handle one input event. Returns whether the view was touched.
    pub fn on_input(&mut self, raw_query: &str) -> bool {
        let EngineState::Ready(index) = &self.state else {
            return false;
        };

        let html = match search::run(index, raw_query, &self.options) {
            SearchOutcome::TooShort => String::new(),
            SearchOutcome::Hits(results) => render_results(&results),
        };
        self.view.replace_results(&html);
        true
    }

    /// Run a pass without rendering. Empty unless the engine is ready.
    pub fn query(&self, raw_query: &str) -> Vec<search::RankedResult> {
        match &self.state {
            EngineState::Ready(index) => search::search(index, raw_query, &self.options),
            _ => Vec::new(),
        }
    }
}
