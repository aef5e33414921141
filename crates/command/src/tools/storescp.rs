// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `storescp`, the DICOM Storage SCP.

use std::path::{Path, PathBuf};

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `storescp [options] port`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorescpOptions {
    /// TCP port to listen on.
    pub port: u32,
    /// `-aet`: AE title this SCP presents to callers.
    pub aetitle: String,
    /// `-od`: directory received files are written under.
    pub output_directory: PathBuf,
    /// `-fork`: spawn a child process per association.
    pub fork: bool,
    /// `-pm`: accept presentation contexts for unknown SOP classes too.
    pub promiscuous: bool,
}

impl StorescpOptions {
    /// Construct with the two fields every caller must set; `fork` and
    /// `promiscuous` default to `false`.
    pub fn new(port: u32, aetitle: impl Into<String>, output_directory: impl Into<PathBuf>) -> Self {
        Self {
            port,
            aetitle: aetitle.into(),
            output_directory: output_directory.into(),
            fork: false,
            promiscuous: false,
        }
    }

    pub fn fork(mut self, fork: bool) -> Self {
        self.fork = fork;
        self
    }

    pub fn promiscuous(mut self, promiscuous: bool) -> Self {
        self.promiscuous = promiscuous;
        self
    }
}

impl ToolOptions for StorescpOptions {
    const TOOL: &'static str = "storescp";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        let port = validate::port(Self::TOOL, "port", self.port)?;
        validate::ae_title(Self::TOOL, "aetitle", &self.aetitle)?;
        validate::output_directory(Self::TOOL, "output_directory", &self.output_directory)?;

        let mut argv = ArgvBuilder::new(binary);
        argv.base_flag("-v")
            .flag_value("-aet", &self.aetitle)
            .flag_value("-od", self.output_directory.to_string_lossy())
            .flag_if("-fork", self.fork)
            .flag_if("-pm", self.promiscuous)
            .positional(port.to_string());
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "storescp_tests.rs"]
mod tests;
