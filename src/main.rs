// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use docsift::inspect::IndexStats;
use docsift::{logging, run_build, search, SearchIndex};

mod cli;
use cli::{display, Cli, Commands, IndexOverrides};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Index {
            content,
            output,
            base_route,
            config,
            loader,
            compact,
        } => {
            let file_config = cli::load_config(config.as_ref())?;
            let build = IndexOverrides {
                content,
                output,
                base_route,
                loader,
                compact,
            }
            .apply(file_config.build);

            run_build(&build).context("index build failed")?;
            Ok(())
        }

        Commands::Search {
            file,
            query,
            limit,
            config,
            json,
        } => {
            let mut options = cli::load_config(config.as_ref())?.search;
            if let Some(limit) = limit {
                options.max_results = limit;
            }

            let index = SearchIndex::load(&file)?;
            let results = search(&index, &query, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_results(&query, &results);
            }
            Ok(())
        }

        Commands::Inspect { file } => inspect(&file),
    }
}

fn inspect(path: &Path) -> anyhow::Result<()> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let stats = IndexStats::from_bytes(&raw)
        .with_context(|| format!("{} is not a search index", path.display()))?;
    display::print_inspect(&path.display().to_string(), &stats);
    Ok(())
}
