// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use dcmtk_core::StreamSource;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to spawn child process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("{stream} buffer exceeded its {cap}-byte cap")]
    BufferOverflow { stream: StreamSource, cap: usize },

    #[error("tool did not exit within the timeout")]
    Timeout,

    #[error("operation was cancelled")]
    Cancelled,
}

/// What a per-tool wrapper returns: either an `ExecError` from the
/// underlying call, a rejected option record, or a translated non-zero
/// exit.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Validation(#[from] dcmtk_core::ValidationError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("{tool} exited with status {exit_code:?}: {stderr}")]
    ExitNonZero { tool: &'static str, exit_code: Option<i32>, stderr: String },
}
