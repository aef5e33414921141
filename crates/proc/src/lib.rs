// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dcmtk-proc: owns the full lifecycle of one supervised child process —
//! spawn, readiness, line/match emission, graceful drain, forced kill.

pub mod emission;
pub mod error;
pub mod supervisor;
pub mod tree_kill;

pub use emission::{Emission, ExitReason, Listener};
pub use error::ProcError;
pub use supervisor::{ProcessSupervisor, ReadinessPredicate, SupervisorOptions};
pub use tree_kill::{kill_unconditionally, terminate};
