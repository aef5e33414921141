// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use super::DcmtkConfig;

#[test]
fn default_config_matches_the_documented_defaults() {
    let config = DcmtkConfig::default();
    assert_eq!(config.start_timeout, Duration::from_secs(10));
    assert_eq!(config.drain_timeout, Duration::from_secs(3));
    assert_eq!(config.settle_delay, Duration::from_millis(500));
    assert!(config.verbose);
}

#[test]
fn partial_toml_overrides_only_the_named_fields() {
    let config = DcmtkConfig::from_toml_str("settle_delay = 800\nverbose = false\n").unwrap();
    assert_eq!(config.settle_delay, Duration::from_millis(800));
    assert!(!config.verbose);
    assert_eq!(config.start_timeout, Duration::from_secs(10));
}

#[test]
fn malformed_toml_surfaces_a_parse_error() {
    let result = DcmtkConfig::from_toml_str("settle_delay = \"not a number\"");
    assert!(result.is_err());
}

#[test]
fn load_reports_the_path_when_the_file_is_missing() {
    let result = DcmtkConfig::load(std::path::Path::new("/nonexistent/dcmtk.toml"));
    assert!(result.is_err());
}
