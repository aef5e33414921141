// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `img2dcm`, which wraps a raster image in a DICOM object.

use std::path::{Path, PathBuf};

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `img2dcm [options] imgfile-in dcmfile-out`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Img2dcmOptions {
    pub input_image: PathBuf,
    pub output_file: PathBuf,
    /// `-stf`: DICOM file to copy patient/study attributes from.
    pub template_file: Option<PathBuf>,
}

impl Img2dcmOptions {
    pub fn new(input_image: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self { input_image: input_image.into(), output_file: output_file.into(), template_file: None }
    }

    pub fn template_file(mut self, template_file: impl Into<PathBuf>) -> Self {
        self.template_file = Some(template_file.into());
        self
    }
}

impl ToolOptions for Img2dcmOptions {
    const TOOL: &'static str = "img2dcm";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        validate::path_segment(Self::TOOL, "input_image", &self.input_image.to_string_lossy())?;
        validate::path_segment(Self::TOOL, "output_file", &self.output_file.to_string_lossy())?;
        if let Some(template) = &self.template_file {
            validate::path_segment(Self::TOOL, "template_file", &template.to_string_lossy())?;
        }

        let mut argv = ArgvBuilder::new(binary);
        argv.flag_value_opt("-stf", self.template_file.as_ref().map(|p| p.to_string_lossy()))
            .positional(self.input_image.to_string_lossy())
            .positional(self.output_file.to_string_lossy());
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "img2dcm_tests.rs"]
mod tests;
