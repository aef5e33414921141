// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timeouts, buffer caps, and verbosity shared across supervised
//! processes. Loadable from a TOML file; every field also has a
//! programmatic default so a caller never has to touch a file at all.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Settings threaded through every `ProcessSupervisor`/`ToolExecutor`
/// instance a host program creates, unless overridden per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DcmtkConfig {
    /// Wall-clock budget for a child to reach RUNNING before it is killed.
    #[serde(with = "duration_millis")]
    pub start_timeout: Duration,
    /// Grace period between a graceful stop signal and the forced kill.
    #[serde(with = "duration_millis")]
    pub drain_timeout: Duration,
    /// Delay after spawn before a server with no readiness predicate is
    /// promoted from STARTING to RUNNING.
    #[serde(with = "duration_millis")]
    pub settle_delay: Duration,
    /// Cap on a single unterminated line before a stream is judged wedged.
    pub max_line_bytes: usize,
    /// Cap on a `ToolExecutor` call's captured stdout/stderr.
    pub capture_cap_bytes: usize,
    /// Extra `-v`/`-d`/`-dd` style verbosity flags passed to every binary.
    pub verbose: bool,
}

impl Default for DcmtkConfig {
    fn default() -> Self {
        Self {
            start_timeout: Duration::from_secs(10),
            drain_timeout: Duration::from_secs(3),
            settle_delay: Duration::from_millis(500),
            max_line_bytes: 1024 * 1024,
            capture_cap_bytes: 8 * 1024 * 1024,
            verbose: true,
        }
    }
}

impl DcmtkConfig {
    /// Parse a `DcmtkConfig` from TOML text; unset fields fall back to
    /// [`DcmtkConfig::default`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a `DcmtkConfig` from a file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
        Self::from_toml_str(&text)
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, s: S) -> Result<S::Ok, S::Error> {
        duration.as_millis().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let millis = u64::deserialize(d)?;
        Ok(Duration::from_millis(millis))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
