// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shared plumbing every per-binary server module composes: resolve
//! the binary, wire its pattern set into an `EventParser`, hand both to a
//! `ProcessSupervisor` tailored with that binary's fatal-event set and a
//! fixed settle delay in place of a log-line readiness predicate.

use std::path::{Path, PathBuf};
use std::time::Duration;

use dcmtk_core::ProcessState;
use dcmtk_events::{fatal_events, pattern_set, EventParser, ServerBinary};
use dcmtk_path::PathResolver;
use dcmtk_proc::{Emission, ProcError, ProcessSupervisor, SupervisorOptions};
use tokio_util::sync::CancellationToken;

use crate::error::ServerError;

/// Resolves `tool`'s absolute path against the process-wide DCMTK
/// installation.
pub(crate) fn resolve_binary(tool: &str) -> Result<PathBuf, ServerError> {
    let root = PathResolver::new().resolve()?;
    root.binary(tool).map(Path::to_path_buf).ok_or_else(|| ServerError::BinaryMissing(tool.to_string()))
}

/// Spawns `binary` with `args`, registering `pattern_binary`'s pattern set
/// and fatal-event set on a freshly built `EventParser`.
///
/// No readiness predicate is supplied: DCMTK's `LISTENING` log line text
/// has drifted across releases, so every server instead promotes itself
/// from STARTING to RUNNING after `settle_delay` elapses with the process
/// still alive, same as an unconfigured supervisor.
pub(crate) async fn start_server(
    binary: &Path,
    args: &[String],
    pattern_binary: ServerBinary,
    settle_delay: Duration,
    cancel: CancellationToken,
) -> Result<Server, ServerError> {
    let mut parser = EventParser::new();
    for pattern in pattern_set(pattern_binary) {
        parser.add_pattern(pattern)?;
    }

    let options = SupervisorOptions {
        fatal_events: fatal_events(pattern_binary),
        settle_delay,
        cancel,
        ..SupervisorOptions::default()
    };
    let mut supervisor = ProcessSupervisor::new(options);
    supervisor.start(binary, args, parser, None).await?;
    Ok(Server { supervisor })
}

/// A running (or starting, or draining) DCMTK server process.
///
/// Wraps a [`ProcessSupervisor`] with a typed event surface:
/// [`Server::on_event`] plus whatever per-event convenience methods the
/// owning binary module adds. The generic [`Server::on`] remains available
/// for anything not named as a convenience.
pub struct Server {
    supervisor: ProcessSupervisor,
}

impl Server {
    pub fn state(&self) -> ProcessState {
        self.supervisor.state()
    }

    /// Registers a listener invoked for every emission, in registration
    /// order — the generic escape hatch beneath every typed convenience.
    pub fn on(&mut self, listener: impl FnMut(&Emission) + Send + 'static) {
        self.supervisor.on(listener);
    }

    /// Registers a listener invoked only for `Match` emissions whose
    /// event name is `name`.
    pub fn on_event(&mut self, name: &'static str, mut listener: impl FnMut(&serde_json::Value) + Send + 'static) {
        self.on(move |emission| {
            if let Emission::Match(record) = emission {
                if record.event == name {
                    listener(&record.data);
                }
            }
        });
    }

    pub async fn stop(&mut self) -> Result<(), ProcError> {
        self.supervisor.stop().await
    }

    pub fn dispose(&mut self) {
        self.supervisor.dispose();
    }
}
