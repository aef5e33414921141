// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-tool wrappers: validate → resolve → build argv → exec → translate.
//!
//! Each wrapper demonstrates a distinct result shape: `echoscu` yields a
//! bare success/failure, `storescu` a per-file status list, `dcmdump` its
//! captured stdout text, `dcmconv`/`img2dcm` the path of the file they
//! produced.

use std::path::{Path, PathBuf};

use dcmtk_command::tools::{DcmconvOptions, DcmdumpOptions, EchoscuOptions, Img2dcmOptions, StorescuOptions};
use dcmtk_command::ToolOptions;

use crate::error::ToolError;
use crate::executor::ToolExecutor;
use crate::output::ExecOptions;

fn non_zero_error<O: ToolOptions>(exit_code: Option<i32>, stderr: String) -> ToolError {
    ToolError::ExitNonZero { tool: O::TOOL, exit_code, stderr }
}

/// Connectivity check: succeeds only on exit code 0.
pub async fn echoscu(
    executor: &ToolExecutor,
    binary: &Path,
    options: &EchoscuOptions,
    exec_options: ExecOptions,
) -> Result<(), ToolError> {
    let argv = options.build(binary)?;
    let output = executor.exec(binary, &argv[1..], exec_options).await?;
    if output.exit_code == Some(0) {
        Ok(())
    } else {
        Err(non_zero_error::<EchoscuOptions>(output.exit_code, output.stderr))
    }
}

/// One status per file handed to `storescu`: there is no per-file
/// confirmation available outside the association's own event stream, so
/// a whole-call success marks every file sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub path: PathBuf,
    pub sent: bool,
}

pub async fn storescu(
    executor: &ToolExecutor,
    binary: &Path,
    options: &StorescuOptions,
    exec_options: ExecOptions,
) -> Result<Vec<FileStatus>, ToolError> {
    let argv = options.build(binary)?;
    let output = executor.exec(binary, &argv[1..], exec_options).await?;
    if output.exit_code != Some(0) {
        return Err(non_zero_error::<StorescuOptions>(output.exit_code, output.stderr));
    }
    Ok(options.files.iter().cloned().map(|path| FileStatus { path, sent: true }).collect())
}

/// The dataset dump, verbatim, as `dcmdump` wrote it to stdout.
pub async fn dcmdump(
    executor: &ToolExecutor,
    binary: &Path,
    options: &DcmdumpOptions,
    exec_options: ExecOptions,
) -> Result<String, ToolError> {
    let argv = options.build(binary)?;
    let output = executor.exec(binary, &argv[1..], exec_options).await?;
    if output.exit_code != Some(0) {
        return Err(non_zero_error::<DcmdumpOptions>(output.exit_code, output.stderr));
    }
    Ok(output.stdout)
}

/// Transcodes one file; on success returns the path it wrote.
pub async fn dcmconv(
    executor: &ToolExecutor,
    binary: &Path,
    options: &DcmconvOptions,
    exec_options: ExecOptions,
) -> Result<PathBuf, ToolError> {
    let argv = options.build(binary)?;
    let output = executor.exec(binary, &argv[1..], exec_options).await?;
    if output.exit_code != Some(0) {
        return Err(non_zero_error::<DcmconvOptions>(output.exit_code, output.stderr));
    }
    Ok(options.output_file.clone())
}

/// Wraps a raster image into a DICOM object; on success returns the path
/// it wrote.
pub async fn img2dcm(
    executor: &ToolExecutor,
    binary: &Path,
    options: &Img2dcmOptions,
    exec_options: ExecOptions,
) -> Result<PathBuf, ToolError> {
    let argv = options.build(binary)?;
    let output = executor.exec(binary, &argv[1..], exec_options).await?;
    if output.exit_code != Some(0) {
        return Err(non_zero_error::<Img2dcmOptions>(output.exit_code, output.stderr));
    }
    Ok(options.output_file.clone())
}

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;
