// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dcmtk-core: shared types, error taxonomy, and clock abstraction used by
//! every other crate in the supervisor workspace.

pub mod macros;

pub mod clock;
pub mod config;
pub mod error;
pub mod types;

pub use clock::{Clock, FakeClock, SystemClock};
pub use config::DcmtkConfig;
pub use error::{ConfigError, DcmtkError, ResolutionError, ValidationError};
pub use types::{BinaryRoot, LineRecord, MatchRecord, ProcessState, StreamSource};

/// Environment variable naming an explicit DCMTK installation directory.
/// When set, `PathResolver` uses it and skips every other probe.
pub const DCMTK_HOME_ENV: &str = "DCMTK_HOME";

/// Hard cap on the number of patterns a single `EventParser` may register.
pub const MAX_PATTERNS: usize = 256;
