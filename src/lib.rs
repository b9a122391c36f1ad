// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side search for static documentation sites.
//!
//! Two halves that share one data format. At site build time the builder
//! walks the markdown tree and writes `search.json`, an ordered array of
//! `{title, content, url}` records. At page load the engine (compiled to
//! WebAssembly) fetches that file once and answers every keystroke with a
//! substring scan, a handful of highlighted snippets per page, and nothing
//! clever in between.
//!
//! # Architecture
//!
//! ```text
//!   build time                               page load
//!  ┌──────────────┐   search.json   ┌──────────────────────────────┐
//!  │    build     │ ──────────────▶ │ engine (Loading/Ready/Unav.) │
//!  │ walk, front  │                 │        │ on_input           │
//!  │ matter, urls │                 │        ▼                    │
//!  └──────────────┘                 │ search: query ─▶ matching   │
//!                                   │   ─▶ snippet ─▶ highlight   │
//!                                   │   ─▶ balance                │
//!                                   │        │                    │
//!                                   │        ▼                    │
//!                                   │ render ─▶ ResultsView       │
//!                                   └──────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use docsift::{search, IndexEntry, SearchIndex, SearchOptions};
//!
//! let index = SearchIndex::new(vec![
//!     IndexEntry::new("Setup Guide", "Install the mod.", "/beamng/setup.html"),
//!     IndexEntry::new("FAQ", "No relevant text here.", "/beamng/faq.html"),
//! ]);
//!
//! let results = search(&index, "mod", &SearchOptions::default());
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].title, "Setup Guide");
//! ```

pub mod build;
pub mod config;
pub mod engine;
pub mod error;
pub mod inspect;
pub mod logging;
pub mod render;
pub mod runtime;
pub mod search;
pub mod types;

#[doc(hidden)]
pub mod testing;

pub use build::{run_build, BuildReport};
pub use config::{BuildConfig, Config};
pub use engine::{EngineState, ResultsView, SearchEngine};
pub use error::{BuildError, ConfigError, LoadError};
pub use search::{search, RankedResult, SearchOptions, SearchOutcome};
pub use types::{IndexEntry, SearchIndex};
