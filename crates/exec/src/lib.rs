// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dcmtk-exec: one-shot request/response over a subprocess — spawn,
//! capture, timeout/cancel, translate into a typed result.

pub mod error;
pub mod executor;
pub mod output;
pub mod tools;

pub use error::{ExecError, ToolError};
pub use executor::ToolExecutor;
pub use output::{ExecOptions, ExecOutput, DEFAULT_CAPTURE_CAP};
