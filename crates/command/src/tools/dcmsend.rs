// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `dcmsend`, DCMTK's higher-level batch send tool.

use std::path::{Path, PathBuf};

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `dcmsend [options] peer port dcmfile-in...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcmsendOptions {
    pub peer: String,
    pub port: u32,
    pub aetitle: String,
    pub call_aetitle: String,
    pub files: Vec<PathBuf>,
    /// `-rse`: recurse into directories given in `files`.
    pub recurse: bool,
}

impl DcmsendOptions {
    pub fn new(
        peer: impl Into<String>,
        port: u32,
        aetitle: impl Into<String>,
        call_aetitle: impl Into<String>,
        files: Vec<PathBuf>,
    ) -> Self {
        Self { peer: peer.into(), port, aetitle: aetitle.into(), call_aetitle: call_aetitle.into(), files, recurse: false }
    }

    pub fn recurse(mut self, recurse: bool) -> Self {
        self.recurse = recurse;
        self
    }
}

impl ToolOptions for DcmsendOptions {
    const TOOL: &'static str = "dcmsend";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        let port = validate::port(Self::TOOL, "port", self.port)?;
        validate::ae_title(Self::TOOL, "aetitle", &self.aetitle)?;
        validate::ae_title(Self::TOOL, "call_aetitle", &self.call_aetitle)?;
        if self.files.is_empty() {
            return Err(ValidationError::MissingField { tool: Self::TOOL.to_string(), field: "files".to_string() });
        }
        for (i, file) in self.files.iter().enumerate() {
            validate::path_segment(Self::TOOL, &format!("files[{i}]"), &file.to_string_lossy())?;
        }

        let mut argv = ArgvBuilder::new(binary);
        argv.base_flag("-v")
            .flag_value("-aet", &self.aetitle)
            .flag_value("-aec", &self.call_aetitle)
            .flag_if("-rse", self.recurse)
            .positional(&self.peer)
            .positional(port.to_string());
        argv.positionals(self.files.iter().map(|f| f.to_string_lossy().into_owned()));
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "dcmsend_tests.rs"]
mod tests;
