// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Everything a [`ProcessSupervisor`](crate::ProcessSupervisor) observes
//! about its child flows through one of these variants, in the order it
//! happened.

use dcmtk_core::{LineRecord, MatchRecord, ProcessState};

/// Why the child's subprocess tree stopped running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitReason {
    /// The process exited on its own; `code` is `None` if it was killed by
    /// a signal rather than returning a status.
    Exited { code: Option<i32> },
    Cancelled,
}

/// One observable event from a supervised child.
#[derive(Debug, Clone)]
pub enum Emission {
    Line(LineRecord),
    Match(MatchRecord),
    BlockTimeout { event: &'static str, lines: Vec<String> },
    State { from: ProcessState, to: ProcessState },
    Exit { reason: ExitReason },
    Error { message: String, fatal: bool },
}

/// A listener invoked synchronously, in registration order, for every
/// emission. Must not block — it runs inline on the supervisor's
/// internal driver loop.
pub type Listener = Box<dyn FnMut(&Emission) + Send>;
