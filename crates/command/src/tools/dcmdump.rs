// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `dcmdump`, which prints a DICOM dataset as text.

use std::path::{Path, PathBuf};

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `dcmdump [options] dcmfile-in`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcmdumpOptions {
    pub input_file: PathBuf,
    /// `+L`: print long tag values in full rather than truncating them.
    pub print_long_values: bool,
}

impl DcmdumpOptions {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self { input_file: input_file.into(), print_long_values: false }
    }

    pub fn print_long_values(mut self, enabled: bool) -> Self {
        self.print_long_values = enabled;
        self
    }
}

impl ToolOptions for DcmdumpOptions {
    const TOOL: &'static str = "dcmdump";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        validate::path_segment(Self::TOOL, "input_file", &self.input_file.to_string_lossy())?;

        let mut argv = ArgvBuilder::new(binary);
        argv.flag_if("+L", self.print_long_values).positional(self.input_file.to_string_lossy());
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "dcmdump_tests.rs"]
mod tests;
