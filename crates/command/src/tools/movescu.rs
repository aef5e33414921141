// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Options for `movescu`, the DICOM Retrieve (C-MOVE) SCU.

use std::path::{Path, PathBuf};

use dcmtk_core::ValidationError;

use crate::argv::ArgvBuilder;
use crate::schema::ToolOptions;
use crate::validate;

/// `movescu [options] peer port dcmfile-in`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovescuOptions {
    pub peer: String,
    pub port: u32,
    pub aetitle: String,
    pub call_aetitle: String,
    /// `-aem`: AE title of the move destination (often this same host, running storescp).
    pub move_destination: String,
    pub query_file: PathBuf,
}

impl MovescuOptions {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        peer: impl Into<String>,
        port: u32,
        aetitle: impl Into<String>,
        call_aetitle: impl Into<String>,
        move_destination: impl Into<String>,
        query_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            peer: peer.into(),
            port,
            aetitle: aetitle.into(),
            call_aetitle: call_aetitle.into(),
            move_destination: move_destination.into(),
            query_file: query_file.into(),
        }
    }
}

impl ToolOptions for MovescuOptions {
    const TOOL: &'static str = "movescu";

    fn build(&self, binary: &Path) -> Result<Vec<String>, ValidationError> {
        let port = validate::port(Self::TOOL, "port", self.port)?;
        validate::ae_title(Self::TOOL, "aetitle", &self.aetitle)?;
        validate::ae_title(Self::TOOL, "call_aetitle", &self.call_aetitle)?;
        validate::ae_title(Self::TOOL, "move_destination", &self.move_destination)?;
        validate::path_segment(Self::TOOL, "query_file", &self.query_file.to_string_lossy())?;

        let mut argv = ArgvBuilder::new(binary);
        argv.base_flag("-v")
            .flag_value("-aet", &self.aetitle)
            .flag_value("-aec", &self.call_aetitle)
            .flag_value("-aem", &self.move_destination)
            .positional(&self.peer)
            .positional(port.to_string())
            .positional(self.query_file.to_string_lossy());
        Ok(argv.build())
    }
}

#[cfg(test)]
#[path = "movescu_tests.rs"]
mod tests;
