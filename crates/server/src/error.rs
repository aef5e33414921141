// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Resolution(#[from] dcmtk_core::ResolutionError),

    #[error(transparent)]
    Validation(#[from] dcmtk_core::ValidationError),

    #[error(transparent)]
    Pattern(#[from] dcmtk_events::PatternError),

    #[error(transparent)]
    Proc(#[from] dcmtk_proc::ProcError),

    #[error("DCMTK installation has no `{0}` binary")]
    BinaryMissing(String),
}
