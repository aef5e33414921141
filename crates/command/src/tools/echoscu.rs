// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `echoscu`, used for DICOM C-ECHO connectivity checks.

use std::path::Path;

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `echoscu [options] peer port`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoscuOptions {
    pub peer: String,
    pub port: u32,
    pub aetitle: String,
    pub call_aetitle: String,
}

impl EchoscuOptions {
    pub fn new(peer: impl Into<String>, port: u32, aetitle: impl Into<String>, call_aetitle: impl Into<String>) -> Self {
        Self { peer: peer.into(), port, aetitle: aetitle.into(), call_aetitle: call_aetitle.into() }
    }
}

impl ToolOptions for EchoscuOptions {
    const TOOL: &'static str = "echoscu";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        let port = validate::port(Self::TOOL, "port", self.port)?;
        validate::ae_title(Self::TOOL, "aetitle", &self.aetitle)?;
        validate::ae_title(Self::TOOL, "call_aetitle", &self.call_aetitle)?;

        let mut argv = ArgvBuilder::new(binary);
        argv.base_flag("-v")
            .flag_value("-aet", &self.aetitle)
            .flag_value("-aec", &self.call_aetitle)
            .positional(&self.peer)
            .positional(port.to_string());
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "echoscu_tests.rs"]
mod tests;
