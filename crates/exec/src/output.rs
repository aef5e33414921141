// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Default cap on a tool's captured stdout or stderr before the call fails.
pub const DEFAULT_CAPTURE_CAP: usize = 8 * 1024 * 1024;

/// Per-call knobs for [`crate::executor::ToolExecutor::exec`].
pub struct ExecOptions {
    /// Wall-clock budget for the whole invocation, spawn to exit.
    pub timeout: Duration,
    /// Grace period between the graceful stop signal and the forced kill,
    /// once `timeout` or `cancel` fires.
    pub drain_timeout: Duration,
    pub stdout_cap: usize,
    pub stderr_cap: usize,
    pub cancel: CancellationToken,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            drain_timeout: Duration::from_secs(3),
            stdout_cap: DEFAULT_CAPTURE_CAP,
            stderr_cap: DEFAULT_CAPTURE_CAP,
            cancel: CancellationToken::new(),
        }
    }
}

/// The outcome of one completed (non-timed-out, non-cancelled) invocation.
///
/// A non-zero `exit_code` is not itself an error — interpretation of exit
/// status is a per-tool concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}
