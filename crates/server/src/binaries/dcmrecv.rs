// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `dcmrecv` server wrapper: the simple DICOM Storage SCP.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use dcmtk_command::tools::DcmrecvOptions;
use dcmtk_command::ToolOptions;
use dcmtk_events::ServerBinary;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::error::ServerError;
use crate::server::{resolve_binary, start_server, Server};

pub const DCMRECV_SETTLE: Duration = Duration::from_millis(500);

pub struct DcmrecvServer(Server);

impl DcmrecvServer {
    pub async fn create(options: DcmrecvOptions, cancel: CancellationToken) -> Result<Self, ServerError> {
        let binary = resolve_binary(DcmrecvOptions::TOOL)?;
        let argv = options.build(&binary)?;
        let server = start_server(&binary, &argv[1..], ServerBinary::Dcmrecv, DCMRECV_SETTLE, cancel).await?;
        Ok(Self(server))
    }

    pub fn on_association_received(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("ASSOCIATION_RECEIVED", listener);
    }

    pub fn on_stored_file(&mut self, listener: impl FnMut(&Value) + Send + 'static) {
        self.0.on_event("STORED_FILE", listener);
    }
}

impl Deref for DcmrecvServer {
    type Target = Server;
    fn deref(&self) -> &Server {
        &self.0
    }
}

impl DerefMut for DcmrecvServer {
    fn deref_mut(&mut self) -> &mut Server {
        &mut self.0
    }
}
