// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;

fn valid() -> DcmrecvOptions {
    DcmrecvOptions::new(11113, "DCMRECV", "/tmp")
}

#[test]
fn builds_expected_argv_order() {
    let bin = PathBuf::from("/opt/dcmtk/bin/dcmrecv");
    let argv = valid().build(&bin).unwrap();
    assert_eq!(
        argv,
        vec!["/opt/dcmtk/bin/dcmrecv", "-v", "-aet", "DCMRECV", "-od", "/tmp", "11113"]
    );
}

#[test]
fn rejects_invalid_port() {
    let bin = PathBuf::from("/bin/dcmrecv");
    let opts = DcmrecvOptions::new(0, "DCMRECV", "/tmp");
    assert!(opts.build(&bin).is_err());
}

#[test]
fn rejects_traversal_in_output_directory() {
    let bin = PathBuf::from("/bin/dcmrecv");
    let opts = DcmrecvOptions::new(104, "DCMRECV", "/var/run/../../etc");
    let err = opts.build(&bin).unwrap_err();
    assert!(matches!(err, dcmtk_core::ValidationError::PathTraversal { .. }));
}
