// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dcmqrscp` server wrapper: the DICOM Query/Retrieve SCP.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use dcmtk_command::tools::DcmqrscpOptions;
use dcmtk_command::ToolOptions;
use dcmtk_events::ServerBinary;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::ServerError;
use crate::server::{resolve_binary, start_server, Server};

/// `dcmqrscp` takes longer to settle than a plain storage SCP: it opens
/// its index database on startup.
pub const DCMQRSCP_SETTLE: Duration = Duration::from_millis(800);

pub struct DcmqrscpServer(Server);

impl DcmqrscpServer {
    pub async fn create(options: DcmqrscpOptions, cancel: CancellationToken) -> Result<Self, ServerError> {
        let binary = resolve_binary(DcmqrscpOptions::TOOL)?;
        let argv = options.build(&binary)?;
        let server = start_server(&binary, &argv[1..], ServerBinary::Dcmqrscp, DCMQRSCP_SETTLE, cancel).await?;
        Ok(Self(server))
    }

    pub fn on_association_received(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("ASSOCIATION_RECEIVED", listener);
    }

    pub fn on_stored_file(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("STORED_FILE", listener);
    }

    pub fn on_find_request(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("C_FIND_REQUEST", listener);
    }

    pub fn on_move_request(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("C_MOVE_REQUEST", listener);
    }

    pub fn on_get_request(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("C_GET_REQUEST", listener);
    }

    pub fn on_database_ready(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("DATABASE_READY", listener);
    }
}

impl Deref for DcmqrscpServer {
    type Target = Server;
    fn deref(&self) -> &Server {
        &self.0
    }
}

impl DerefMut for DcmqrscpServer {
    fn deref_mut(&mut self) -> &mut Server {
        &mut self.0
    }
}
