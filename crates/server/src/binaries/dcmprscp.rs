// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dcmprscp` server wrapper: the Basic Grayscale Print Management SCP.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use dcmtk_command::tools::DcmprscpOptions;
use dcmtk_command::ToolOptions;
use dcmtk_events::ServerBinary;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::ServerError;
use crate::server::{resolve_binary, start_server, Server};

pub const DCMPRSCP_SETTLE: Duration = Duration::from_millis(500);

pub struct DcmprscpServer(Server);

impl DcmprscpServer {
    pub async fn create(options: DcmprscpOptions, cancel: CancellationToken) -> Result<Self, ServerError> {
        let binary = resolve_binary(DcmprscpOptions::TOOL)?;
        let argv = options.build(&binary)?;
        let server = start_server(&binary, &argv[1..], ServerBinary::Dcmprscp, DCMPRSCP_SETTLE, cancel).await?;
        Ok(Self(server))
    }

    pub fn on_association_received(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("ASSOCIATION_RECEIVED", listener);
    }

    pub fn on_config_error(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("CONFIG_ERROR", listener);
    }
}

impl Deref for DcmprscpServer {
    type Target = Server;
    fn deref(&self) -> &Server {
        &self.0
    }
}

impl DerefMut for DcmprscpServer {
    fn deref_mut(&mut self) -> &mut Server {
        &mut self.0
    }
}
