// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dcmtk_core::ProcessState;
use dcmtk_events::EventParser;
use std::path::PathBuf;
use std::time::Duration;

fn sh() -> PathBuf {
    PathBuf::from("/bin/sh")
}

fn contains(needle: &'static str) -> ReadinessPredicate {
    std::sync::Arc::new(move |line: &str| line.contains(needle))
}

#[tokio::test]
async fn reaches_running_when_readiness_predicate_matches() {
    let mut supervisor = ProcessSupervisor::new(SupervisorOptions::default());
    let argv = vec!["-c".to_string(), "echo ready; sleep 5".to_string()];

    let result = supervisor.start(&sh(), &argv, EventParser::new(), Some(contains("ready"))).await;

    assert!(result.is_ok(), "expected readiness, got {result:?}");
    assert_eq!(supervisor.state(), ProcessState::Running);

    supervisor.stop().await.unwrap();
    assert_eq!(supervisor.state(), ProcessState::Stopped);
}

#[tokio::test]
async fn reaches_running_via_settle_delay_when_no_predicate_is_given() {
    let options = SupervisorOptions { settle_delay: Duration::from_millis(50), ..SupervisorOptions::default() };
    let mut supervisor = ProcessSupervisor::new(options);
    let argv = vec!["-c".to_string(), "sleep 5".to_string()];

    let result = supervisor.start(&sh(), &argv, EventParser::new(), None).await;

    assert!(result.is_ok());
    assert_eq!(supervisor.state(), ProcessState::Running);
    supervisor.stop().await.unwrap();
}

#[tokio::test]
async fn early_exit_before_readiness_fails_start_and_reaches_failed() {
    let mut supervisor = ProcessSupervisor::new(SupervisorOptions::default());
    let argv = vec!["-c".to_string(), "echo boom 1>&2; exit 3".to_string()];

    let result = supervisor.start(&sh(), &argv, EventParser::new(), Some(contains("never-matches"))).await;

    match result {
        Err(ProcError::EarlyExit { exit_code, .. }) => assert_eq!(exit_code, Some(3)),
        other => panic!("expected EarlyExit, got {other:?}"),
    }
    assert_eq!(supervisor.state(), ProcessState::Failed);
}

#[tokio::test]
async fn start_timeout_kills_the_child_and_reaches_failed() {
    let options = SupervisorOptions { start_timeout: Duration::from_millis(50), ..SupervisorOptions::default() };
    let mut supervisor = ProcessSupervisor::new(options);
    let argv = vec!["-c".to_string(), "sleep 30".to_string()];

    let result = supervisor.start(&sh(), &argv, EventParser::new(), Some(contains("never-matches"))).await;

    assert!(matches!(result, Err(ProcError::StartTimeout)), "expected StartTimeout, got {result:?}");
    assert_eq!(supervisor.state(), ProcessState::Failed);
}

#[tokio::test]
async fn stop_is_idempotent_after_the_child_has_already_stopped() {
    let mut supervisor = ProcessSupervisor::new(SupervisorOptions::default());
    let argv = vec!["-c".to_string(), "echo ready; sleep 5".to_string()];
    supervisor.start(&sh(), &argv, EventParser::new(), Some(contains("ready"))).await.unwrap();

    supervisor.stop().await.unwrap();
    assert_eq!(supervisor.state(), ProcessState::Stopped);

    // Second stop on an already-terminal supervisor must also succeed.
    supervisor.stop().await.unwrap();
    assert_eq!(supervisor.state(), ProcessState::Stopped);
}

#[tokio::test]
async fn start_fails_outside_idle() {
    let mut supervisor = ProcessSupervisor::new(SupervisorOptions::default());
    let argv = vec!["-c".to_string(), "echo ready; sleep 5".to_string()];
    supervisor.start(&sh(), &argv, EventParser::new(), Some(contains("ready"))).await.unwrap();

    let second = supervisor.start(&sh(), &argv, EventParser::new(), None).await;
    assert!(matches!(second, Err(ProcError::NotIdle)));

    supervisor.stop().await.unwrap();
}

#[tokio::test]
async fn line_and_match_emissions_observe_registration_order() {
    use std::sync::{Arc, Mutex};

    let mut supervisor = ProcessSupervisor::new(SupervisorOptions::default());
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let first = seen.clone();
    supervisor.on(move |_emission| first.lock().unwrap().push("first".to_string()));
    let second = seen.clone();
    supervisor.on(move |_emission| second.lock().unwrap().push("second".to_string()));

    let argv = vec!["-c".to_string(), "echo ready; sleep 5".to_string()];
    supervisor.start(&sh(), &argv, EventParser::new(), Some(contains("ready"))).await.unwrap();
    supervisor.stop().await.unwrap();

    let order = seen.lock().unwrap();
    for pair in order.chunks(2) {
        assert_eq!(pair, ["first", "second"]);
    }
}

#[tokio::test]
async fn dispose_is_callable_in_any_state_without_blocking() {
    let mut supervisor = ProcessSupervisor::new(SupervisorOptions::default());
    supervisor.dispose();
    assert_eq!(supervisor.state(), ProcessState::Idle);

    let argv = vec!["-c".to_string(), "echo ready; sleep 5".to_string()];
    supervisor.start(&sh(), &argv, EventParser::new(), Some(contains("ready"))).await.unwrap();
    supervisor.dispose();
}
