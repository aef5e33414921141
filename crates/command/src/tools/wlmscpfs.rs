// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `wlmscpfs`, DCMTK's filesystem-based Worklist SCP.

use std::path::{Path, PathBuf};

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `wlmscpfs [options] port`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WlmscpfsOptions {
    pub port: u32,
    /// `-aet`: AE title this SCP presents to callers.
    pub aetitle: String,
    /// `-dfp`: directory holding the worklist files it serves queries from.
    pub data_source_directory: PathBuf,
}

impl WlmscpfsOptions {
    pub fn new(port: u32, aetitle: impl Into<String>, data_source_directory: impl Into<PathBuf>) -> Self {
        Self { port, aetitle: aetitle.into(), data_source_directory: data_source_directory.into() }
    }
}

impl ToolOptions for WlmscpfsOptions {
    const TOOL: &'static str = "wlmscpfs";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        let port = validate::port(Self::TOOL, "port", self.port)?;
        validate::ae_title(Self::TOOL, "aetitle", &self.aetitle)?;
        validate::path_segment(Self::TOOL, "data_source_directory", &self.data_source_directory.to_string_lossy())?;

        let mut argv = ArgvBuilder::new(binary);
        argv.base_flag("-v")
            .flag_value("-aet", &self.aetitle)
            .flag_value("-dfp", self.data_source_directory.to_string_lossy())
            .positional(port.to_string());
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "wlmscpfs_tests.rs"]
mod tests;
