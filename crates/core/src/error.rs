// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace-wide error aggregation.
//!
//! Each crate defines its own `thiserror` enum for the failures it can
//! produce; this type exists for host programs that want one error to
//! `?` across crate boundaries instead of matching on each kind.

use thiserror::Error;

/// Aggregated error type spanning every component in the workspace.
#[derive(Debug, Error)]
pub enum DcmtkError {
    #[error(transparent)]
    Resolution(#[from] crate::ResolutionError),

    #[error(transparent)]
    Validation(#[from] crate::ValidationError),

    #[error(transparent)]
    Config(#[from] crate::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A `DcmtkConfig` file could not be read or parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read { path: String, #[source] source: std::io::Error },

    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

/// A DCMTK installation could not be located or is incomplete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("no candidate directory satisfies the required-binary manifest; missing: {missing:?}")]
    ManifestUnsatisfied { missing: Vec<String> },

    #[error("explicit DCMTK_HOME {path} does not exist or is not a directory")]
    ExplicitRootInvalid { path: String },
}

/// An option record failed schema validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown field `{field}` for tool `{tool}`")]
    UnknownField { tool: String, field: String },

    #[error("missing required field `{field}` for tool `{tool}`")]
    MissingField { tool: String, field: String },

    #[error("field `{field}` on tool `{tool}` out of range: {message}")]
    OutOfRange { tool: String, field: String, message: String },

    #[error("field `{field}` on tool `{tool}` contains a path-traversal segment: {value:?}")]
    PathTraversal { tool: String, field: String, value: String },

    #[error("field `{field}` on tool `{tool}` has invalid shape: {message}")]
    InvalidShape { tool: String, field: String, message: String },
}
