// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Build errors are fatal by policy: a half-written index is worse than no
//! index, so every variant here aborts `docsift index` before anything is
//! written. Load errors put the browser engine into its unavailable state.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while producing the search index artifact.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("content root {} does not exist", .0.display())]
    MissingRoot(PathBuf),

    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("duplicate url {url} (from {})", path.display())]
    DuplicateUrl { url: String, path: PathBuf },

    #[error("failed to serialize index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while obtaining a usable index for querying.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("index is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("index fetch failed: {0}")]
    Fetch(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure while loading `docsift.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
