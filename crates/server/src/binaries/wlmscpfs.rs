// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `wlmscpfs` server wrapper: the filesystem-based Worklist SCP.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use dcmtk_command::tools::WlmscpfsOptions;
use dcmtk_command::ToolOptions;
use dcmtk_events::ServerBinary;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::ServerError;
use crate::server::{resolve_binary, start_server, Server};

pub const WLMSCPFS_SETTLE: Duration = Duration::from_millis(500);

pub struct WlmscpfsServer(Server);

impl WlmscpfsServer {
    pub async fn create(options: WlmscpfsOptions, cancel: CancellationToken) -> Result<Self, ServerError> {
        let binary = resolve_binary(WlmscpfsOptions::TOOL)?;
        let argv = options.build(&binary)?;
        let server = start_server(&binary, &argv[1..], ServerBinary::Wlmscpfs, WLMSCPFS_SETTLE, cancel).await?;
        Ok(Self(server))
    }

    pub fn on_find_request(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("C_FIND_REQUEST", listener);
    }

    pub fn on_database_ready(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("DATABASE_READY", listener);
    }

    pub fn on_config_error(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("CONFIG_ERROR", listener);
    }
}

impl Deref for WlmscpfsServer {
    type Target = Server;
    fn deref(&self) -> &Server {
        &self.0
    }
}

impl DerefMut for WlmscpfsServer {
    fn deref_mut(&mut self) -> &mut Server {
        &mut self.0
    }
}
