// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locates a usable DCMTK installation and caches the result for the
//! lifetime of the process.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use parking_lot::Mutex;

use dcmtk_core::{BinaryRoot, ResolutionError, DCMTK_HOME_ENV};

use crate::candidates::{path_candidates, platform_candidates};
use crate::manifest::{OPTIONAL_BINARIES, REQUIRED_BINARIES};

static CACHE: OnceLock<Mutex<Option<BinaryRoot>>> = OnceLock::new();

fn cache() -> &'static Mutex<Option<BinaryRoot>> {
    CACHE.get_or_init(|| Mutex::new(None))
}

/// Locates and validates a DCMTK installation.
///
/// Stateless by construction (all process-global state lives behind
/// `CACHE`); `PathResolver::new()` always returns a working value.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathResolver;

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a DCMTK installation, consulting the cache first.
    ///
    /// Probes, in order: `DCMTK_HOME`, platform well-known directories,
    /// then `PATH`. The first directory satisfying [`REQUIRED_BINARIES`]
    /// wins and is cached until [`PathResolver::clear_cache`] or process exit.
    pub fn resolve(&self) -> Result<BinaryRoot, ResolutionError> {
        {
            let guard = cache().lock();
            if let Some(root) = guard.as_ref() {
                tracing::trace!("returning cached DCMTK root");
                return Ok(root.clone());
            }
        }

        let root = self.resolve_uncached()?;
        *cache().lock() = Some(root.clone());
        Ok(root)
    }

    /// Drop the cached `BinaryRoot`, forcing the next `resolve()` to re-probe.
    pub fn clear_cache(&self) {
        tracing::debug!("clearing DCMTK path resolution cache");
        *cache().lock() = None;
    }

    fn resolve_uncached(&self) -> Result<BinaryRoot, ResolutionError> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(explicit) = std::env::var_os(DCMTK_HOME_ENV) {
            candidates.push(PathBuf::from(explicit));
        }
        candidates.extend(platform_candidates());
        candidates.extend(path_candidates());

        let mut best_missing: Option<Vec<String>> = None;

        for dir in candidates {
            tracing::debug!(dir = %dir.display(), "probing candidate directory");
            match probe(&dir) {
                Ok(root) => {
                    tracing::info!(dir = %dir.display(), "resolved DCMTK installation");
                    return Ok(root);
                }
                Err(missing) => {
                    tracing::debug!(dir = %dir.display(), ?missing, "candidate incomplete");
                    if best_missing.as_ref().is_none_or(|b| missing.len() < b.len()) {
                        best_missing = Some(missing);
                    }
                }
            }
        }

        Err(ResolutionError::ManifestUnsatisfied { missing: best_missing.unwrap_or_else(|| {
            REQUIRED_BINARIES.iter().map(|s| s.to_string()).collect()
        }) })
    }
}

/// Check whether `dir` satisfies the manifest; on success returns the
/// resolved `BinaryRoot` (including any optional binaries found alongside
/// the required ones). On failure returns the list of missing names.
fn probe(dir: &Path) -> Result<BinaryRoot, Vec<String>> {
    if !dir.is_dir() {
        return Err(REQUIRED_BINARIES.iter().map(|s| s.to_string()).collect());
    }

    let mut missing = Vec::new();
    let mut binaries = HashMap::new();

    for name in REQUIRED_BINARIES {
        let path = exe_path(dir, name);
        if is_executable(&path) {
            binaries.insert(name.to_string(), path);
        } else {
            missing.push(name.to_string());
        }
    }

    if !missing.is_empty() {
        return Err(missing);
    }

    for name in OPTIONAL_BINARIES {
        let path = exe_path(dir, name);
        if is_executable(&path) {
            binaries.insert(name.to_string(), path);
        }
    }

    Ok(BinaryRoot::new(dir.to_path_buf(), binaries))
}

#[cfg(target_os = "windows")]
fn exe_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.exe"))
}

#[cfg(not(target_os = "windows"))]
fn exe_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(all(test, unix))]
#[path = "resolver_tests.rs"]
mod tests;
