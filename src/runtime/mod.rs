// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings.
//!
//! The browser is the only runtime: the engine is compiled to WebAssembly and
//! driven by `docsift-loader.js`. Native callers use [`crate::engine`]
//! directly.

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::DocSiftEngine;
