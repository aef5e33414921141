// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `dcmconv`, which transcodes a DICOM file's transfer syntax.

use std::path::{Path, PathBuf};

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// Target transfer syntax, mapped to `dcmconv`'s `+t*` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSyntax {
    ExplicitLittleEndian,
    ExplicitBigEndian,
    ImplicitLittleEndian,
}

impl TransferSyntax {
    fn flag(self) -> &'static str {
        match self {
            TransferSyntax::ExplicitLittleEndian => "+te",
            TransferSyntax::ExplicitBigEndian => "+tb",
            TransferSyntax::ImplicitLittleEndian => "+ti",
        }
    }
}

/// `dcmconv [options] dcmfile-in dcmfile-out`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcmconvOptions {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub transfer_syntax: TransferSyntax,
}

impl DcmconvOptions {
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>, transfer_syntax: TransferSyntax) -> Self {
        Self { input_file: input_file.into(), output_file: output_file.into(), transfer_syntax }
    }
}

impl ToolOptions for DcmconvOptions {
    const TOOL: &'static str = "dcmconv";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        validate::path_segment(Self::TOOL, "input_file", &self.input_file.to_string_lossy())?;
        validate::path_segment(Self::TOOL, "output_file", &self.output_file.to_string_lossy())?;

        let mut argv = ArgvBuilder::new(binary);
        argv.base_flag(self.transfer_syntax.flag())
            .positional(self.input_file.to_string_lossy())
            .positional(self.output_file.to_string_lossy());
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "dcmconv_tests.rs"]
mod tests;
