// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `dcmrecv`, DCMTK's simple DICOM Storage SCP.

use std::path::{Path, PathBuf};

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `dcmrecv [options] port`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcmrecvOptions {
    pub port: u32,
    /// `-aet`: AE title this SCP presents to callers.
    pub aetitle: String,
    /// `-od`: directory received files are written under.
    pub output_directory: PathBuf,
}

impl DcmrecvOptions {
    pub fn new(port: u32, aetitle: impl Into<String>, output_directory: impl Into<PathBuf>) -> Self {
        Self { port, aetitle: aetitle.into(), output_directory: output_directory.into() }
    }
}

impl ToolOptions for DcmrecvOptions {
    const TOOL: &'static str = "dcmrecv";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        let port = validate::port(Self::TOOL, "port", self.port)?;
        validate::ae_title(Self::TOOL, "aetitle", &self.aetitle)?;
        validate::output_directory(Self::TOOL, "output_directory", &self.output_directory)?;

        let mut argv = ArgvBuilder::new(binary);
        argv.base_flag("-v")
            .flag_value("-aet", &self.aetitle)
            .flag_value("-od", self.output_directory.to_string_lossy())
            .positional(port.to_string());
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "dcmrecv_tests.rs"]
mod tests;
