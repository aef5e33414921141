// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dcmtk-server: per-binary `ServerShell` composition — binds a resolved
//! binary, a `CommandBuilder`-validated argv, an `EventParser` loaded with
//! that binary's pattern set, and a `ProcessSupervisor` into one typed
//! handle per long-lived DCMTK server.

pub mod binaries;
pub mod error;
mod server;


pub use binaries::{
    DcmprscpServer, DcmpsrcvServer, DcmqrscpServer, DcmrecvServer, StorescpServer, WlmscpfsServer,
    DCMPRSCP_SETTLE, DCMPSRCV_SETTLE, DCMQRSCP_SETTLE, DCMRECV_SETTLE, STORESCP_SETTLE, WLMSCPFS_SETTLE,
};
pub use error::ServerError;
pub use server::Server;
