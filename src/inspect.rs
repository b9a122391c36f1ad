// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index statistics for `docsift inspect`.
//!
//! The artifact ships to every visitor, so what matters is how big it is on
//! the wire. Static hosts serve JSON with brotli, so the compressed size is
//! the number to watch; the CRC32 lets two deploy logs be compared without
//! diffing the files.

use std::io::Write;

use crate::error::LoadError;
use crate::types::SearchIndex;

/// Summary of a serialized index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub entries: usize,
    /// Entries with no title, or a blank one.
    pub untitled: usize,
    /// URL and content length (bytes) of the entry with the most content.
    pub largest: Option<(String, usize)>,
    /// A URL shared by two entries. Built indexes never have one.
    pub duplicate_url: Option<String>,
    pub bytes: usize,
    pub brotli_bytes: usize,
    pub checksum: u32,
}

impl IndexStats {
    /// Parse `raw` as an index and summarize it.
    pub fn from_bytes(raw: &[u8]) -> Result<Self, LoadError> {
        let index: SearchIndex = serde_json::from_slice(raw)?;
        Ok(Self::compute(&index, raw))
    }

    /// Summarize an already-parsed index. `raw` is its serialized form.
    pub fn compute(index: &SearchIndex, raw: &[u8]) -> Self {
        let untitled = index
            .iter()
            .filter(|entry| entry.title.as_deref().map_or(true, |t| t.trim().is_empty()))
            .count();

        let largest = index
            .iter()
            .max_by_key(|entry| entry.content.len())
            .map(|entry| (entry.url.clone(), entry.content.len()));

        Self {
            entries: index.len(),
            untitled,
            largest,
            duplicate_url: index.duplicate_url().map(str::to_string),
            bytes: raw.len(),
            brotli_bytes: compress_brotli(raw).len(),
            checksum: crc32fast::hash(raw),
        }
    }
}

fn compress_brotli(data: &[u8]) -> Vec<u8> {
    let mut compressed = Vec::new();
    {
        let mut encoder = brotli::CompressorWriter::new(&mut compressed, 4096, 11, 22);
        // Writes into a Vec cannot fail.
        let _ = encoder.write_all(data);
    }
    compressed
}
