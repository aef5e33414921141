// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;

#[test]
fn builds_expected_argv_order() {
    let bin = PathBuf::from("/opt/dcmtk/bin/wlmscpfs");
    let argv = WlmscpfsOptions::new(11115, "WLMSCPFS", "/var/dcmtk/worklists").build(&bin).unwrap();
    assert_eq!(
        argv,
        vec!["/opt/dcmtk/bin/wlmscpfs", "-v", "-aet", "WLMSCPFS", "-dfp", "/var/dcmtk/worklists", "11115"]
    );
}

#[test]
fn rejects_traversal_in_data_source_directory() {
    let bin = PathBuf::from("/bin/wlmscpfs");
    let opts = WlmscpfsOptions::new(104, "WLMSCPFS", "/var/../etc");
    let err = opts.build(&bin).unwrap_err();
    assert!(matches!(err, dcmtk_core::ValidationError::PathTraversal { .. }));
}
