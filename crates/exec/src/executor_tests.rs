// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;
use std::time::Duration;

fn sh() -> PathBuf {
    PathBuf::from("/bin/sh")
}

#[tokio::test]
async fn captures_stdout_stderr_and_exit_code() {
    let executor = ToolExecutor::new();
    let args = vec!["-c".to_string(), "echo out; echo err 1>&2; exit 7".to_string()];

    let result = executor.exec(&sh(), &args, ExecOptions::default()).await.unwrap();

    assert_eq!(result.stdout.trim(), "out");
    assert_eq!(result.stderr.trim(), "err");
    assert_eq!(result.exit_code, Some(7));
}

#[tokio::test]
async fn spawn_failure_surfaces_as_spawn_error() {
    let executor = ToolExecutor::new();
    let result = executor.exec(&PathBuf::from("/no/such/binary"), &[], ExecOptions::default()).await;
    assert!(matches!(result, Err(ExecError::Spawn(_))));
}

#[tokio::test]
async fn timeout_kills_the_child_and_returns_timeout_error() {
    let executor = ToolExecutor::new();
    let options = ExecOptions {
        timeout: Duration::from_millis(50),
        drain_timeout: Duration::from_millis(100),
        ..ExecOptions::default()
    };
    let args = vec!["-c".to_string(), "sleep 30".to_string()];

    let result = executor.exec(&sh(), &args, options).await;

    assert!(matches!(result, Err(ExecError::Timeout)), "expected Timeout, got {result:?}");
}

#[tokio::test]
async fn cancel_token_wins_over_a_running_child() {
    let executor = ToolExecutor::new();
    let cancel = tokio_util::sync::CancellationToken::new();
    let options = ExecOptions { cancel: cancel.clone(), drain_timeout: Duration::from_millis(100), ..ExecOptions::default() };
    let args = vec!["-c".to_string(), "sleep 30".to_string()];

    let handle = tokio::spawn(async move { executor.exec(&sh(), &args, options).await });
    tokio::time::sleep(Duration::from_millis(20)).await;
    cancel.cancel();

    let result = handle.await.unwrap();
    assert!(matches!(result, Err(ExecError::Cancelled)));
}

#[tokio::test]
async fn overflowing_stdout_cap_fails_the_call() {
    let executor = ToolExecutor::new();
    let options = ExecOptions { stdout_cap: 8, ..ExecOptions::default() };
    let args = vec!["-c".to_string(), "echo this line is much longer than eight bytes".to_string()];

    let result = executor.exec(&sh(), &args, options).await;

    assert!(matches!(result, Err(ExecError::BufferOverflow { cap: 8, .. })), "got {result:?}");
}
