// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Owns the full lifecycle of one child process: spawn, readiness
//! detection, line/match emission, graceful drain, forced kill.

use crate::emission::{Emission, ExitReason, Listener};
use crate::error::ProcError;
use crate::tree_kill;
use dcmtk_core::{MatchRecord, ProcessState, StreamSource};
use dcmtk_events::{EventParser, ParseEvent};
use dcmtk_lines::LineExtractor;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::{Child, ChildStderr, ChildStdout};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// A line-matching predicate that promotes the supervisor from STARTING to
/// RUNNING as soon as it sees a line it recognizes as the child's
/// ready-for-traffic signal.
pub type ReadinessPredicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

const STDERR_TAIL_CAPACITY: usize = 20;

#[derive(Clone)]
pub struct SupervisorOptions {
    pub start_timeout: Duration,
    pub drain_timeout: Duration,
    pub settle_delay: Duration,
    pub fatal_events: &'static [&'static str],
    pub cancel: CancellationToken,
}

impl Default for SupervisorOptions {
    fn default() -> Self {
        Self {
            start_timeout: Duration::from_secs(10),
            drain_timeout: Duration::from_secs(3),
            settle_delay: Duration::from_millis(500),
            fatal_events: &[],
            cancel: CancellationToken::new(),
        }
    }
}

enum Control {
    Stop,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Starting,
    Running,
    Draining,
    Killing,
}

/// Owns exactly one child process. Not clonable, not shareable: the caller
/// that owns a `&mut ProcessSupervisor` is the only one that may drive it.
pub struct ProcessSupervisor {
    options: SupervisorOptions,
    state: Arc<Mutex<ProcessState>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
    control_tx: Option<mpsc::Sender<Control>>,
    join_handle: Option<JoinHandle<()>>,
}

impl ProcessSupervisor {
    pub fn new(options: SupervisorOptions) -> Self {
        Self {
            options,
            state: Arc::new(Mutex::new(ProcessState::Idle)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            control_tx: None,
            join_handle: None,
        }
    }

    pub fn state(&self) -> ProcessState {
        *self.state.lock()
    }

    /// Registers a listener invoked synchronously, in registration order,
    /// for every subsequent emission.
    pub fn on(&mut self, listener: impl FnMut(&Emission) + Send + 'static) {
        self.listeners.lock().push(Box::new(listener));
    }

    /// Spawns the child and resolves once it is ready (or has failed to
    /// become ready). Valid only from IDLE.
    pub async fn start(
        &mut self,
        binary: &Path,
        argv: &[String],
        event_parser: EventParser,
        is_started: Option<ReadinessPredicate>,
    ) -> Result<(), ProcError> {
        if self.state() != ProcessState::Idle {
            return Err(ProcError::NotIdle);
        }

        if self.options.cancel.is_cancelled() {
            transition(&self.state, &self.listeners, ProcessState::Failed);
            return Err(ProcError::Cancelled);
        }

        let mut command = tokio::process::Command::new(binary);
        command.args(argv);
        command.stdin(std::process::Stdio::null());
        command.stdout(std::process::Stdio::piped());
        command.stderr(std::process::Stdio::piped());
        // Aborting the driver task (dispose, or drop) drops the `Child`; this
        // ensures that alone is enough to release the OS process.
        command.kill_on_drop(true);
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(err) => {
                transition(&self.state, &self.listeners, ProcessState::Failed);
                return Err(ProcError::Spawn(err));
            }
        };

        let pid = match child.id() {
            Some(pid) => pid,
            None => {
                transition(&self.state, &self.listeners, ProcessState::Failed);
                return Err(ProcError::Spawn(std::io::Error::other("child exited before a pid was observed")));
            }
        };
        let stdout = child.stdout.take().expect("spawned with piped stdout");
        let stderr = child.stderr.take().expect("spawned with piped stderr");

        transition(&self.state, &self.listeners, ProcessState::Starting);

        let (control_tx, control_rx) = mpsc::channel(4);
        let (ready_tx, ready_rx) = oneshot::channel();

        let ctx = RunCtx {
            pid,
            child,
            stdout_extractor: LineExtractor::new(stdout, StreamSource::Stdout),
            stderr_extractor: LineExtractor::new(stderr, StreamSource::Stderr),
            event_parser,
            is_started,
            fatal_events: self.options.fatal_events,
            start_timeout: self.options.start_timeout,
            drain_timeout: self.options.drain_timeout,
            settle_delay: self.options.settle_delay,
            state: self.state.clone(),
            listeners: self.listeners.clone(),
            control_rx,
            ready_tx: Some(ready_tx),
            cancel: self.options.cancel.clone(),
        };

        self.control_tx = Some(control_tx);
        self.join_handle = Some(tokio::spawn(run(ctx)));

        match ready_rx.await {
            Ok(result) => result,
            Err(_) => Err(ProcError::EarlyExit { exit_code: None, stderr: String::new() }),
        }
    }

    /// Idempotent. Drains a RUNNING child gracefully, forcing a kill if it
    /// does not exit within the drain timeout. A no-op in every other
    /// state.
    pub async fn stop(&mut self) -> Result<(), ProcError> {
        if self.state() == ProcessState::Running {
            if let Some(tx) = &self.control_tx {
                let _ = tx.send(Control::Stop).await;
            }
        }
        if let Some(handle) = self.join_handle.take() {
            let _ = handle.await;
        }
        Ok(())
    }

    /// Synchronously drops every resource and listener. Callable in any
    /// state, including terminal ones; never blocks on child exit.
    pub fn dispose(&mut self) {
        self.control_tx = None;
        if let Some(handle) = self.join_handle.take() {
            handle.abort();
        }
        self.listeners.lock().clear();
    }
}

fn transition(state: &Arc<Mutex<ProcessState>>, listeners: &Arc<Mutex<Vec<Listener>>>, to: ProcessState) {
    let from = {
        let mut guard = state.lock();
        let from = *guard;
        if let Some(next) = from.transition(to) {
            *guard = next;
        }
        from
    };
    emit(listeners, Emission::State { from, to });
}

fn emit(listeners: &Arc<Mutex<Vec<Listener>>>, emission: Emission) {
    let mut guard = listeners.lock();
    for listener in guard.iter_mut() {
        listener(&emission);
    }
}

struct RunCtx {
    pid: u32,
    child: Child,
    stdout_extractor: LineExtractor<ChildStdout>,
    stderr_extractor: LineExtractor<ChildStderr>,
    event_parser: EventParser,
    is_started: Option<ReadinessPredicate>,
    fatal_events: &'static [&'static str],
    start_timeout: Duration,
    drain_timeout: Duration,
    settle_delay: Duration,
    state: Arc<Mutex<ProcessState>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
    control_rx: mpsc::Receiver<Control>,
    ready_tx: Option<oneshot::Sender<Result<(), ProcError>>>,
    cancel: CancellationToken,
}

async fn run(mut ctx: RunCtx) {
    let mut phase = Phase::Starting;
    let start_deadline = Instant::now() + ctx.start_timeout;
    let mut settle_deadline = (ctx.is_started.is_none()).then(|| Instant::now() + ctx.settle_delay);
    let mut drain_deadline: Option<Instant> = None;
    let mut stdout_done = false;
    let mut stderr_done = false;
    let mut stderr_tail: Vec<String> = Vec::new();
    let mut cancel_handled = false;

    loop {
        let stdout_fut = async {
            if stdout_done {
                std::future::pending().await
            } else {
                ctx.stdout_extractor.next_line().await
            }
        };
        let stderr_fut = async {
            if stderr_done {
                std::future::pending().await
            } else {
                ctx.stderr_extractor.next_line().await
            }
        };
        let start_timer = async {
            if phase == Phase::Starting {
                tokio::time::sleep_until(start_deadline).await;
            } else {
                std::future::pending::<()>().await;
            }
        };
        let settle_timer = async {
            match settle_deadline {
                Some(deadline) if phase == Phase::Starting => tokio::time::sleep_until(deadline).await,
                _ => std::future::pending::<()>().await,
            }
        };
        let drain_timer = async {
            match drain_deadline {
                Some(deadline) if phase == Phase::Draining => tokio::time::sleep_until(deadline).await,
                _ => std::future::pending::<()>().await,
            }
        };
        let block_tick = async {
            if ctx.event_parser.has_active_block() {
                tokio::time::sleep(Duration::from_millis(50)).await;
            } else {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            line = stdout_fut => {
                match line {
                    Some(record) => {
                        handle_line(&mut ctx, &mut phase, record);
                    }
                    None => stdout_done = true,
                }
            }
            line = stderr_fut => {
                match line {
                    Some(record) => {
                        if stderr_tail.len() == STDERR_TAIL_CAPACITY {
                            stderr_tail.remove(0);
                        }
                        stderr_tail.push(record.text.clone());
                        handle_line(&mut ctx, &mut phase, record);
                    }
                    None => stderr_done = true,
                }
            }
            _ = block_tick => {
                if let Some(ParseEvent::BlockTimeout { event, lines }) = ctx.event_parser.check_timeout() {
                    emit(&ctx.listeners, Emission::BlockTimeout { event, lines });
                }
            }
            ctrl = ctx.control_rx.recv() => {
                if matches!(ctrl, Some(Control::Stop)) && phase == Phase::Running {
                    phase = Phase::Draining;
                    transition(&ctx.state, &ctx.listeners, ProcessState::Draining);
                    let _ = tree_kill::terminate(ctx.pid);
                    drain_deadline = Some(Instant::now() + ctx.drain_timeout);
                }
            }
            _ = ctx.cancel.cancelled(), if !cancel_handled => {
                cancel_handled = true;
                match phase {
                    Phase::Starting => {
                        let _ = tree_kill::kill_unconditionally(ctx.pid);
                        transition(&ctx.state, &ctx.listeners, ProcessState::Failed);
                        if let Some(tx) = ctx.ready_tx.take() {
                            let _ = tx.send(Err(ProcError::Cancelled));
                        }
                        let _ = ctx.child.wait().await;
                        emit(&ctx.listeners, Emission::Exit { reason: ExitReason::Cancelled });
                        break;
                    }
                    Phase::Running => {
                        phase = Phase::Draining;
                        transition(&ctx.state, &ctx.listeners, ProcessState::Draining);
                        let _ = tree_kill::terminate(ctx.pid);
                        drain_deadline = Some(Instant::now() + ctx.drain_timeout);
                    }
                    Phase::Draining | Phase::Killing => {}
                }
            }
            status = ctx.child.wait() => {
                let code = status.ok().and_then(|s| s.code());
                match phase {
                    Phase::Starting => {
                        transition(&ctx.state, &ctx.listeners, ProcessState::Failed);
                        if let Some(tx) = ctx.ready_tx.take() {
                            let _ = tx.send(Err(ProcError::EarlyExit { exit_code: code, stderr: stderr_tail.join("\n") }));
                        }
                    }
                    Phase::Running => {
                        transition(&ctx.state, &ctx.listeners, ProcessState::Failed);
                    }
                    Phase::Draining => {
                        transition(&ctx.state, &ctx.listeners, ProcessState::Stopped);
                    }
                    Phase::Killing => {
                        transition(&ctx.state, &ctx.listeners, ProcessState::Stopped);
                    }
                }
                emit(&ctx.listeners, Emission::Exit { reason: ExitReason::Exited { code } });
                break;
            }
            _ = start_timer => {
                let _ = tree_kill::kill_unconditionally(ctx.pid);
                transition(&ctx.state, &ctx.listeners, ProcessState::Failed);
                if let Some(tx) = ctx.ready_tx.take() {
                    let _ = tx.send(Err(ProcError::StartTimeout));
                }
                let status = ctx.child.wait().await;
                let code = status.ok().and_then(|s| s.code());
                emit(&ctx.listeners, Emission::Exit { reason: ExitReason::Exited { code } });
                break;
            }
            _ = settle_timer => {
                phase = Phase::Running;
                settle_deadline = None;
                transition(&ctx.state, &ctx.listeners, ProcessState::Running);
                if let Some(tx) = ctx.ready_tx.take() {
                    let _ = tx.send(Ok(()));
                }
            }
            _ = drain_timer => {
                phase = Phase::Killing;
                drain_deadline = None;
                transition(&ctx.state, &ctx.listeners, ProcessState::Killing);
                let _ = tree_kill::kill_unconditionally(ctx.pid);
            }
        }
    }
}

/// Shared tail of line handling: emit the line, check readiness, feed the
/// parser, and forward whatever it produced.
fn handle_line(ctx: &mut RunCtx, phase: &mut Phase, record: dcmtk_core::LineRecord) {
    emit(&ctx.listeners, Emission::Line(record.clone()));

    if *phase == Phase::Starting {
        if let Some(predicate) = &ctx.is_started {
            if predicate(&record.text) {
                *phase = Phase::Running;
                transition(&ctx.state, &ctx.listeners, ProcessState::Running);
                if let Some(tx) = ctx.ready_tx.take() {
                    let _ = tx.send(Ok(()));
                }
            }
        }
    }

    match ctx.event_parser.feed(&record.text) {
        Some(ParseEvent::Match(MatchRecord { event, data })) => {
            if ctx.fatal_events.contains(&event) {
                emit(&ctx.listeners, Emission::Error { message: format!("fatal match: {event}"), fatal: true });
            }
            emit(&ctx.listeners, Emission::Match(MatchRecord::new(event, data)));
        }
        Some(ParseEvent::BlockTimeout { event, lines }) => {
            emit(&ctx.listeners, Emission::BlockTimeout { event, lines });
        }
        None => {}
    }
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
