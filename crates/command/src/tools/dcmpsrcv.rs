// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `dcmpsrcv`, DCMTK's Print Spool Storage SCP — receives
//! stored print jobs into a spool directory for `dcmprscp` to pick up.

use std::path::{Path, PathBuf};

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `dcmpsrcv [options] config-file spool-id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcmpsrcvOptions {
    pub config_file: PathBuf,
    pub spool_id: String,
}

impl DcmpsrcvOptions {
    pub fn new(config_file: impl Into<PathBuf>, spool_id: impl Into<String>) -> Self {
        Self { config_file: config_file.into(), spool_id: spool_id.into() }
    }
}

impl ToolOptions for DcmpsrcvOptions {
    const TOOL: &'static str = "dcmpsrcv";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        validate::path_segment(Self::TOOL, "config_file", &self.config_file.to_string_lossy())?;
        validate::path_segment(Self::TOOL, "spool_id", &self.spool_id)?;

        let mut argv = ArgvBuilder::new(binary);
        argv.base_flag("-v")
            .positional(self.config_file.to_string_lossy())
            .positional(&self.spool_id);
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "dcmpsrcv_tests.rs"]
mod tests;
