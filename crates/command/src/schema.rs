// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `ToolOptions` contract every per-tool schema implements.
//!
//! Each tool gets its own Rust struct with declared field types and
//! ranges — a closed-world option record: unknown keys can't exist
//! because there is no map to put them in, enforced by the type system
//! instead of at runtime.

use std::path::Path;

use dcmtk_core::ValidationError;

/// A validated, renderable option record for one DCMTK tool.
pub trait ToolOptions {
    /// Tool name, used in error messages and for binary lookup.
    const TOOL: &'static str;

    /// Validate `self` and render it to an argv, with `binary` as `argv[0]`.
    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError>;
}
