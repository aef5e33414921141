// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;

#[test]
fn builds_expected_argv_with_recurse() {
    let bin = PathBuf::from("/bin/dcmsend");
    let opts = DcmsendOptions::new("host", 104, "SCU", "SCP", vec![PathBuf::from("dir")]).recurse(true);
    let argv = opts.build(&bin).unwrap();
    assert!(argv.contains(&"-rse".to_string()));
    assert_eq!(argv.last().unwrap(), "dir");
}

#[test]
fn omits_recurse_flag_by_default() {
    let bin = PathBuf::from("/bin/dcmsend");
    let opts = DcmsendOptions::new("host", 104, "SCU", "SCP", vec![PathBuf::from("a.dcm")]);
    let argv = opts.build(&bin).unwrap();
    assert!(!argv.contains(&"-rse".to_string()));
}
