// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dcmtk-command: validates option records against per-tool schemas and
//! renders them to a safe argv.

pub mod argv;
pub mod schema;
pub mod tools;
pub mod validate;

pub use argv::ArgvBuilder;
pub use schema::ToolOptions;
