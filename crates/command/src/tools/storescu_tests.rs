// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;

#[test]
fn builds_expected_argv() {
    let bin = PathBuf::from("/bin/storescu");
    let opts = StorescuOptions::new("10.0.0.1", 104, "SCU", "STORESCP", vec![PathBuf::from("a.dcm")]);
    let argv = opts.build(&bin).unwrap();
    assert_eq!(
        argv,
        vec!["/bin/storescu", "-v", "-aet", "SCU", "-aec", "STORESCP", "10.0.0.1", "104", "a.dcm"]
    );
}

#[test]
fn rejects_empty_file_list() {
    let bin = PathBuf::from("/bin/storescu");
    let opts = StorescuOptions::new("10.0.0.1", 104, "SCU", "STORESCP", vec![]);
    assert!(matches!(opts.build(&bin), Err(dcmtk_core::ValidationError::MissingField { .. })));
}

#[test]
fn rejects_traversal_in_file_list() {
    let bin = PathBuf::from("/bin/storescu");
    let opts =
        StorescuOptions::new("10.0.0.1", 104, "SCU", "STORESCP", vec![PathBuf::from("../../etc/passwd")]);
    assert!(opts.build(&bin).is_err());
}

#[test]
fn sends_multiple_files_in_order() {
    let bin = PathBuf::from("/bin/storescu");
    let files = vec![PathBuf::from("a.dcm"), PathBuf::from("b.dcm"), PathBuf::from("c.dcm")];
    let opts = StorescuOptions::new("10.0.0.1", 104, "SCU", "STORESCP", files);
    let argv = opts.build(&bin).unwrap();
    assert_eq!(&argv[argv.len() - 3..], &["a.dcm", "b.dcm", "c.dcm"]);
}
