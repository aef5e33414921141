// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot subprocess execution: spawn, capture, timeout/cancel, exit.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use dcmtk_core::StreamSource;
use dcmtk_proc::tree_kill;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::error::ExecError;
use crate::output::{ExecOptions, ExecOutput};

const READ_CHUNK: usize = 8 * 1024;

/// Runs one binary to completion and captures its output.
///
/// Stateless; a single instance drives any number of concurrent calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToolExecutor;

impl ToolExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `binary` with `args` (argv[1…], never including the program
    /// name itself) and awaits its exit, capping captured stdout/stderr at
    /// `options`'s buffers. A fired timeout or cancel signal always winds
    /// the child down deterministically: graceful terminate, a drain
    /// grace period, then an unconditional kill.
    pub async fn exec(&self, binary: &Path, args: &[String], options: ExecOptions) -> Result<ExecOutput, ExecError> {
        let mut command = Command::new(binary);
        command.args(args);
        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        command.kill_on_drop(true);
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let mut child = command.spawn().map_err(ExecError::Spawn)?;
        let pid = child.id();
        let stdout = child.stdout.take().expect("piped stdout");
        let stderr = child.stderr.take().expect("piped stderr");

        let (fault_tx, mut fault_rx) = mpsc::channel::<ExecError>(2);
        let stdout_task =
            tokio::spawn(read_capped(stdout, options.stdout_cap, StreamSource::Stdout, fault_tx.clone()));
        let stderr_task = tokio::spawn(read_capped(stderr, options.stderr_cap, StreamSource::Stderr, fault_tx));

        let deadline = Instant::now() + options.timeout;

        tokio::select! {
            Some(fault) = fault_rx.recv() => {
                wind_down(pid, &mut child, options.drain_timeout).await;
                stdout_task.abort();
                stderr_task.abort();
                Err(fault)
            }
            () = options.cancel.cancelled() => {
                wind_down(pid, &mut child, options.drain_timeout).await;
                stdout_task.abort();
                stderr_task.abort();
                Err(ExecError::Cancelled)
            }
            () = tokio::time::sleep_until(deadline) => {
                wind_down(pid, &mut child, options.drain_timeout).await;
                stdout_task.abort();
                stderr_task.abort();
                Err(ExecError::Timeout)
            }
            status = child.wait() => {
                let status = status.map_err(ExecError::Spawn)?;
                let stdout_bytes = stdout_task.await.unwrap_or_default();
                let stderr_bytes = stderr_task.await.unwrap_or_default();
                Ok(ExecOutput {
                    stdout: String::from_utf8_lossy(&stdout_bytes).into_owned(),
                    stderr: String::from_utf8_lossy(&stderr_bytes).into_owned(),
                    exit_code: status.code(),
                })
            }
        }
    }
}

async fn wind_down(pid: Option<u32>, child: &mut Child, drain_timeout: Duration) {
    if let Some(pid) = pid {
        let _ = tree_kill::terminate(pid);
    }
    if tokio::time::timeout(drain_timeout, child.wait()).await.is_err() {
        if let Some(pid) = pid {
            let _ = tree_kill::kill_unconditionally(pid);
        }
        let _ = child.wait().await;
    }
}

async fn read_capped<R: AsyncRead + Unpin>(
    mut reader: R,
    cap: usize,
    stream: StreamSource,
    fault_tx: mpsc::Sender<ExecError>,
) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        match reader.read(&mut chunk).await {
            Ok(0) => return buf,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.len() > cap {
                    let _ = fault_tx.send(ExecError::BufferOverflow { stream, cap }).await;
                    return buf;
                }
            }
            Err(_) => return buf,
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
