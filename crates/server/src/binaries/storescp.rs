// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `storescp` server wrapper: DICOM Storage SCP.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use dcmtk_command::tools::StorescpOptions;
use dcmtk_command::ToolOptions;
use dcmtk_events::ServerBinary;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::ServerError;
use crate::server::{resolve_binary, start_server, Server};

/// Delay after spawn before the supervisor promotes this server from
/// STARTING to RUNNING; no readiness predicate inspects its log output.
pub const STORESCP_SETTLE: Duration = Duration::from_millis(500);

pub struct StorescpServer(Server);

impl StorescpServer {
    pub async fn create(options: StorescpOptions, cancel: CancellationToken) -> Result<Self, ServerError> {
        let binary = resolve_binary(StorescpOptions::TOOL)?;
        let argv = options.build(&binary)?;
        let server = start_server(&binary, &argv[1..], ServerBinary::Storescp, STORESCP_SETTLE, cancel).await?;
        Ok(Self(server))
    }

    pub fn on_association_received(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("ASSOCIATION_RECEIVED", listener);
    }

    pub fn on_storing_file(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("STORING_FILE", listener);
    }

    pub fn on_stored_file(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("STORED_FILE", listener);
    }
}

impl Deref for StorescpServer {
    type Target = Server;
    fn deref(&self) -> &Server {
        &self.0
    }
}

impl DerefMut for StorescpServer {
    fn deref_mut(&mut self) -> &mut Server {
        &mut self.0
    }
}
