// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;

fn valid() -> StorescpOptions {
    StorescpOptions::new(11112, "STORESCP", "/tmp")
}

#[test]
fn builds_expected_argv_order() {
    let bin = PathBuf::from("/opt/dcmtk/bin/storescp");
    let argv = valid().build(&bin).unwrap();
    assert_eq!(
        argv,
        vec![
            "/opt/dcmtk/bin/storescp",
            "-v",
            "-aet",
            "STORESCP",
            "-od",
            "/tmp",
            "11112",
        ]
    );
}

#[test]
fn fork_and_promiscuous_are_emitted_when_set() {
    let bin = PathBuf::from("/bin/storescp");
    let argv = valid().fork(true).promiscuous(true).build(&bin).unwrap();
    assert!(argv.contains(&"-fork".to_string()));
    assert!(argv.contains(&"-pm".to_string()));
}

#[test]
fn rejects_invalid_port() {
    let bin = PathBuf::from("/bin/storescp");
    let opts = StorescpOptions::new(70000, "STORESCP", "/tmp");
    assert!(opts.build(&bin).is_err());
}

#[test]
fn rejects_traversal_in_output_directory() {
    let bin = PathBuf::from("/bin/storescp");
    let opts = StorescpOptions::new(104, "STORESCP", "/var/run/../../etc");
    let err = opts.build(&bin).unwrap_err();
    assert!(matches!(err, dcmtk_core::ValidationError::PathTraversal { .. }));
}

#[test]
fn rejects_bad_ae_title() {
    let bin = PathBuf::from("/bin/storescp");
    let opts = StorescpOptions::new(104, "this title has spaces and is too long", "/tmp");
    assert!(opts.build(&bin).is_err());
}

#[test]
fn no_argv_element_is_embedded_with_other_values() {
    // V1: every argv element is one validated primitive, not a concatenation.
    let bin = PathBuf::from("/bin/storescp");
    let argv = valid().build(&bin).unwrap();
    assert!(!argv.iter().any(|a| a.contains(' ') && a.starts_with('-')));
}
