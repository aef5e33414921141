// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field-level validators shared by every tool schema.
//!
//! Each one either returns the validated value unchanged or a
//! [`ValidationError`] naming the tool and field that failed.

use std::path::Path;
use std::sync::OnceLock;

use dcmtk_core::ValidationError;
use regex::Regex;

/// Matches any `..` path segment, forward- or back-slash delimited.
fn traversal_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(^|[/\\])\.\.([/\\]|$)").expect("static pattern is valid"))
}

/// AE titles use a restricted alphabet: ASCII letters, digits, `_`, `-`, `.`.
fn ae_title_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_.-]{1,16}$").expect("static pattern is valid"))
}

/// Reject a path-shaped string containing a `..` traversal segment.
pub fn path_segment(tool: &str, field: &str, value: &str) -> Result<(), ValidationError> {
    if traversal_pattern().is_match(value) {
        return Err(ValidationError::PathTraversal {
            tool: tool.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validate a directory/file path argument: no traversal segment, and (for
/// output directories) the parent must already exist so the resulting
/// argv can't be used to probe arbitrary filesystem locations blind.
pub fn output_directory(tool: &str, field: &str, value: &Path) -> Result<(), ValidationError> {
    let as_str = value.to_string_lossy();
    path_segment(tool, field, &as_str)?;
    if value.is_absolute() && !value.exists() {
        return Err(ValidationError::InvalidShape {
            tool: tool.to_string(),
            field: field.to_string(),
            message: format!("directory does not exist: {}", value.display()),
        });
    }
    Ok(())
}

/// TCP port in `[1, 65535]`.
pub fn port(tool: &str, field: &str, value: u32) -> Result<u16, ValidationError> {
    if value == 0 || value > 65535 {
        return Err(ValidationError::OutOfRange {
            tool: tool.to_string(),
            field: field.to_string(),
            message: format!("port {value} not in 1..=65535"),
        });
    }
    Ok(value as u16)
}

/// DICOM AE title: 1-16 characters from a restricted alphabet.
pub fn ae_title(tool: &str, field: &str, value: &str) -> Result<(), ValidationError> {
    if !ae_title_pattern().is_match(value) {
        return Err(ValidationError::InvalidShape {
            tool: tool.to_string(),
            field: field.to_string(),
            message: format!("{value:?} is not 1-16 chars of [A-Za-z0-9_.-]"),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
