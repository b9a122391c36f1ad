// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Three subcommands: `index` builds `search.json` from a content tree,
//! `search` runs the browser's query pipeline natively against a built index,
//! and `inspect` reports what the artifact will cost visitors to download.
//! Every `index` flag has a default, so a bare `docsift index` works on the
//! conventional layout.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use docsift::{BuildConfig, Config};

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Client-side search index builder for static documentation sites",
    version
)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the search index from a directory of markdown files
    Index {
        /// Content root to index [default: beamng]
        #[arg(short, long)]
        content: Option<PathBuf>,

        /// Output path for the JSON index [default: assets/search.json]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Route prefix for page URLs [default: /beamng]
        #[arg(short, long)]
        base_route: Option<String>,

        /// Config file [default: ./docsift.toml if present]
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also write docsift-loader.js next to the index
        #[arg(long)]
        loader: bool,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Search a built index and print the results
    Search {
        /// Path to the JSON index
        file: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (overrides the config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Config file for search options
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect a built index
    Inspect {
        /// Path to the JSON index
        file: PathBuf,
    },
}

/// Overrides from `docsift index` flags.
pub struct IndexOverrides {
    pub content: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub base_route: Option<String>,
    pub loader: bool,
    pub compact: bool,
}

impl IndexOverrides {
    /// Apply flags on top of the file config. Flags win.
    pub fn apply(self, mut build: BuildConfig) -> BuildConfig {
        if let Some(content) = self.content {
            build.content_dir = content;
        }
        if let Some(output) = self.output {
            build.output = output;
        }
        if let Some(base_route) = self.base_route {
            build.base_route = base_route;
        }
        build.emit_loader |= self.loader;
        if self.compact {
            build.pretty = false;
        }
        build
    }
}

/// Load the config for a subcommand.
pub fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    Ok(Config::discover(path.map(PathBuf::as_path))?)
}
