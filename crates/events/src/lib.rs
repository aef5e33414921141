// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dcmtk-events: matches extracted lines against a registered pattern set
//! and assembles header/footer-delimited multi-line blocks.

pub mod error;
pub mod pattern;
pub mod parser;
pub mod taxonomy;

pub use error::PatternError;
pub use pattern::{empty_processor, field_processor, EventPattern, Processor};
pub use parser::{EventParser, ParseEvent};
pub use taxonomy::{fatal_events, pattern_set, ServerBinary};
