// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dcmtk-lines: bounded, lazy line extraction over an async byte stream.

pub mod extractor;

pub use extractor::{truncation_marker, LineExtractor, DEFAULT_MAX_LINE_BYTES};
