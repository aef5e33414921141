// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `dcmqrscp`, the DICOM Query/Retrieve SCP.
//!
//! Unlike `storescp`, `dcmqrscp` takes almost all of its configuration
//! (AE titles, port, storage areas) from a config file rather than flags.

use std::path::{Path, PathBuf};

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `dcmqrscp [options] [config-file]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcmqrscpOptions {
    pub config_file: PathBuf,
}

impl DcmqrscpOptions {
    pub fn new(config_file: impl Into<PathBuf>) -> Self {
        Self { config_file: config_file.into() }
    }
}

impl ToolOptions for DcmqrscpOptions {
    const TOOL: &'static str = "dcmqrscp";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        validate::path_segment(Self::TOOL, "config_file", &self.config_file.to_string_lossy())?;

        let mut argv = ArgvBuilder::new(binary);
        argv.base_flag("-v").positional(self.config_file.to_string_lossy());
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "dcmqrscp_tests.rs"]
mod tests;
