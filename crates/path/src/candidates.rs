// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Platform-specific well-known install locations, probed after the
//! explicit environment root and before the OS executable search path.

use std::path::PathBuf;

/// A per-user install directory, for hosts where DCMTK was unpacked into
/// the invoking user's local data directory rather than a system prefix.
fn user_local_candidate() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("dcmtk").join("bin"))
}

#[cfg(target_os = "linux")]
pub fn platform_candidates() -> Vec<PathBuf> {
    let mut candidates =
        vec![PathBuf::from("/usr/bin"), PathBuf::from("/usr/local/bin"), PathBuf::from("/opt/dcmtk/bin")];
    candidates.extend(user_local_candidate());
    candidates
}

#[cfg(target_os = "macos")]
pub fn platform_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![
        PathBuf::from("/usr/local/bin"),
        PathBuf::from("/opt/homebrew/bin"),
        PathBuf::from("/Applications/DCMTK.app/Contents/bin"),
    ];
    candidates.extend(user_local_candidate());
    candidates
}

#[cfg(target_os = "windows")]
pub fn platform_candidates() -> Vec<PathBuf> {
    let mut candidates =
        vec![PathBuf::from(r"C:\Program Files\DCMTK\bin"), PathBuf::from(r"C:\Program Files (x86)\DCMTK\bin")];
    candidates.extend(user_local_candidate());
    candidates
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub fn platform_candidates() -> Vec<PathBuf> {
    user_local_candidate().into_iter().collect()
}

/// Directories on the OS executable search path, in PATH enumeration order.
pub fn path_candidates() -> Vec<PathBuf> {
    std::env::var_os("PATH").map(|p| std::env::split_paths(&p).collect()).unwrap_or_default()
}
