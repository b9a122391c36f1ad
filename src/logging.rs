// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tracing initialization for the CLI.
//!
//! The library only emits events. Installing a subscriber is the binary's job,
//! and happens once.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the stderr subscriber. Safe to call multiple times.
///
/// `RUST_LOG` takes precedence; `verbose` raises the default from `warn` to
/// `debug` for the crate.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let default_directive = if verbose { "docsift=debug" } else { "docsift=warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr))
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact()
            .try_init();

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
