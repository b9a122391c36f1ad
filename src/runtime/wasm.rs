// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search engine.
//!
//! This is the browser-facing API. The loader owns the DOM; the engine owns
//! everything else. Rendering goes through a single JS callback that receives
//! the container's new HTML:
//!
//! ```js
//! const engine = new DocSiftEngine((html) => { results.innerHTML = html; });
//! input.addEventListener("input", () => engine.onInput(input.value));
//! fetch("/assets/search.json")
//!     .then((r) => (r.ok ? r.text() : Promise.reject(r.status)))
//!     .then((body) => engine.loadIndex(body), (e) => engine.fail(String(e)));
//! ```
//!
//! `searchSync` skips rendering and returns the result objects, for callers
//! that want to build their own markup.

use js_sys::Function;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::engine::{ResultsView, SearchEngine};
use crate::search::SearchOptions;

/// Results container backed by a JS render callback.
struct CallbackView {
    render: Function,
}

impl ResultsView for CallbackView {
    fn replace_results(&mut self, html: &str) {
        if let Err(e) = self.render.call1(&JsValue::NULL, &JsValue::from_str(html)) {
            tracing::warn!(error = ?e, "render callback threw");
        }
    }
}

/// WASM engine, a thin wrapper around [`SearchEngine`].
#[wasm_bindgen]
pub struct DocSiftEngine {
    inner: SearchEngine<CallbackView>,
}

#[wasm_bindgen]
impl DocSiftEngine {
    /// Create an engine in the loading state.
    ///
    /// `options` is an optional object with camelCase `SearchOptions` fields;
    /// missing fields keep their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(render: Function, options: JsValue) -> Result<DocSiftEngine, JsValue> {
        let options: SearchOptions = if options.is_undefined() || options.is_null() {
            SearchOptions::default()
        } else {
            from_value(options).map_err(|e| JsValue::from_str(&format!("invalid options: {}", e)))?
        };

        // The loader only constructs an engine once both elements exist.
        SearchEngine::attach(true, Some(CallbackView { render }), options)
            .map(|inner| DocSiftEngine { inner })
            .ok_or_else(|| JsValue::from_str("search elements missing"))
    }

    /// Settle the index fetch with the response body.
    #[wasm_bindgen(js_name = loadIndex)]
    pub fn load_index(&mut self, json: &str) {
        self.inner.load_json(json);
    }

    /// Settle the index fetch as failed.
    #[wasm_bindgen]
    pub fn fail(&mut self, reason: &str) {
        self.inner.fail(reason);
    }

    /// Handle an input event. Returns whether the container was re-rendered.
    #[wasm_bindgen(js_name = onInput)]
    pub fn on_input(&mut self, query: &str) -> bool {
        self.inner.on_input(query)
    }

    /// `"loading"`, `"ready"` or `"unavailable"`.
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        self.inner.state().name().to_string()
    }

    /// Run a pass and return the results as plain objects.
    #[wasm_bindgen(js_name = searchSync)]
    pub fn search_sync(&self, query: &str) -> Result<JsValue, JsValue> {
        to_value(&self.inner.query(query)).map_err(|e| e.to_string().into())
    }
}
