// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcError {
    #[error("start() is only valid from the idle state")]
    NotIdle,

    #[error("failed to spawn child process: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("child exited before reaching readiness (exit code {exit_code:?}); stderr: {stderr}")]
    EarlyExit { exit_code: Option<i32>, stderr: String },

    #[error("child did not become ready within the start timeout")]
    StartTimeout,

    #[error("operation was cancelled")]
    Cancelled,
}
