// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared data types that flow between every component: the resolved
//! binary set, line records, match records, and the process state machine.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// An absolute DCMTK install directory plus the resolved path to each
/// binary named in the required-binary manifest (and any optional ones
/// found alongside it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryRoot {
    root: PathBuf,
    binaries: HashMap<String, PathBuf>,
}

impl BinaryRoot {
    pub fn new(root: PathBuf, binaries: HashMap<String, PathBuf>) -> Self {
        Self { root, binaries }
    }

    /// The directory this root was resolved from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path to `tool`, if it was found during resolution.
    pub fn binary(&self, tool: &str) -> Option<&Path> {
        self.binaries.get(tool).map(PathBuf::as_path)
    }

    /// Every tool name this root knows about.
    pub fn tools(&self) -> impl Iterator<Item = &str> {
        self.binaries.keys().map(String::as_str)
    }
}

/// Which child stream a [`LineRecord`] was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamSource {
    Stdout,
    Stderr,
}

crate::simple_display! {
    StreamSource {
        Stdout => "stdout",
        Stderr => "stderr",
    }
}

/// One newline-delimited record produced by a [`StreamSource`].
///
/// `text` never contains the terminating `\n`/`\r\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub source: StreamSource,
    pub text: String,
}

impl LineRecord {
    pub fn new(source: StreamSource, text: impl Into<String>) -> Self {
        Self { source, text: text.into() }
    }
}

/// A pattern match emitted by the event parser.
///
/// `data` is whatever the matching pattern's processor returned; `serde_json::Value`
/// is the opaque payload shape so downstream consumers can route on `event`
/// without the parser crate knowing about every server's event types.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub event: &'static str,
    pub data: serde_json::Value,
}

impl MatchRecord {
    pub fn new(event: &'static str, data: serde_json::Value) -> Self {
        Self { event, data }
    }
}

/// Lifecycle state of one supervised subprocess.
///
/// `transition` is the single place the transition table below is
/// enforced; nothing else in the crate mutates a raw state value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessState {
    Idle,
    Starting,
    Running,
    Draining,
    Killing,
    Stopped,
    Failed,
}

crate::simple_display! {
    ProcessState {
        Idle => "idle",
        Starting => "starting",
        Running => "running",
        Draining => "draining",
        Killing => "killing",
        Stopped => "stopped",
        Failed => "failed",
    }
}

impl ProcessState {
    /// Terminal states never transition again.
    pub fn is_terminal(self) -> bool {
        matches!(self, ProcessState::Stopped | ProcessState::Failed)
    }

    /// Whether `next` is a legal transition from `self`.
    ///
    /// State only advances; there are no back-transitions within one
    /// lifecycle.
    pub fn can_transition_to(self, next: ProcessState) -> bool {
        use ProcessState::*;
        matches!(
            (self, next),
            (Idle, Starting)
                | (Starting, Running)
                | (Starting, Failed)
                | (Running, Draining)
                | (Running, Failed)
                | (Draining, Stopped)
                | (Draining, Killing)
                | (Killing, Stopped)
        )
    }

    /// Apply a transition, returning the new state or `None` if illegal.
    pub fn transition(self, next: ProcessState) -> Option<ProcessState> {
        self.can_transition_to(next).then_some(next)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
