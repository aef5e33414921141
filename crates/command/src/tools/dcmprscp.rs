// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `dcmprscp`, DCMTK's Basic Grayscale Print Management SCP.

use std::path::Path;

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `dcmprscp [options] port`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcmprscpOptions {
    pub port: u32,
    /// `-aet`: AE title this SCP presents to callers.
    pub aetitle: String,
}

impl DcmprscpOptions {
    pub fn new(port: u32, aetitle: impl Into<String>) -> Self {
        Self { port, aetitle: aetitle.into() }
    }
}

impl ToolOptions for DcmprscpOptions {
    const TOOL: &'static str = "dcmprscp";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        let port = validate::port(Self::TOOL, "port", self.port)?;
        validate::ae_title(Self::TOOL, "aetitle", &self.aetitle)?;

        let mut argv = ArgvBuilder::new(binary);
        argv.base_flag("-v").flag_value("-aet", &self.aetitle).positional(port.to_string());
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "dcmprscp_tests.rs"]
mod tests;
