// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site configuration.
//!
//! Everything has a default, so a site that keeps its pages in `beamng/` and
//! serves the index from `/assets/search.json` needs no config file at all.
//! When `docsift.toml` exists next to the site it may override any field:
//!
//! ```toml
//! [build]
//! content_dir = "docs"
//! output = "static/search.json"
//! base_route = "/docs"
//!
//! [search]
//! max_results = 20
//! ```
//!
//! CLI flags win over the file, the file wins over defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::search::SearchOptions;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "docsift.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub build: BuildConfig,
    pub search: SearchOptions,
}

/// Index builder settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Root of the content tree to index.
    pub content_dir: PathBuf,
    /// Artifact path. Parent directories are created.
    pub output: PathBuf,
    /// Route prefix for page URLs.
    pub base_route: String,
    /// Extension of source documents (without the dot).
    pub source_extension: String,
    /// Extension of rendered pages (without the dot).
    pub page_extension: String,
    /// Indent the JSON artifact.
    pub pretty: bool,
    /// Also write `docsift-loader.js` next to the artifact.
    pub emit_loader: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("beamng"),
            output: PathBuf::from("assets/search.json"),
            base_route: "/beamng".to_string(),
            source_extension: "md".to_string(),
            page_extension: "html".to_string(),
            pretty: true,
            emit_loader: false,
        }
    }
}

impl Config {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file. The file must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load `path` if given, else `docsift.toml` if present, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }
}
