// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading.
//!
//! Reading a few hundred markdown files is I/O bound and embarrassingly
//! parallel, so rayon fans the reads out. `collect()` on an indexed parallel
//! iterator keeps the input order, which is what keeps the artifact
//! deterministic: the index comes out in discovery order no matter which
//! thread finished first.
//!
//! Any read failure fails the whole load. There is no "skip and warn".

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::types::IndexEntry;

use super::{to_entry, SourceDocument};

fn load_entry(document: &SourceDocument, config: &BuildConfig) -> Result<IndexEntry, BuildError> {
    let raw = fs::read_to_string(&document.path).map_err(|source| BuildError::Read {
        path: document.path.clone(),
        source,
    })?;
    Ok(to_entry(document, &raw, config))
}

/// Load every document into an index entry, preserving order.
#[cfg(feature = "parallel")]
pub fn load_entries(
    documents: &[SourceDocument],
    config: &BuildConfig,
) -> Result<Vec<IndexEntry>, BuildError> {
    documents
        .par_iter()
        .map(|document| load_entry(document, config))
        .collect()
}

/// Load every document into an index entry, preserving order.
#[cfg(not(feature = "parallel"))]
pub fn load_entries(
    documents: &[SourceDocument],
    config: &BuildConfig,
) -> Result<Vec<IndexEntry>, BuildError> {
    documents
        .iter()
        .map(|document| load_entry(document, config))
        .collect()
}

/// Load every document with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_entries_with_progress(
    documents: &[SourceDocument],
    config: &BuildConfig,
    progress: &ProgressBar,
) -> Result<Vec<IndexEntry>, BuildError> {
    let counter = AtomicUsize::new(0);
    let total = documents.len();

    documents
        .par_iter()
        .map(|document| {
            let entry = load_entry(document, config)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(entry)
        })
        .collect()
}

/// Non-parallel fallback (no progress).
#[cfg(not(feature = "parallel"))]
pub fn load_entries_with_progress(
    documents: &[SourceDocument],
    config: &BuildConfig,
) -> Result<Vec<IndexEntry>, BuildError> {
    load_entries(documents, config)
}
