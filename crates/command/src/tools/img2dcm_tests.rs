// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;

#[test]
fn builds_minimal_argv() {
    let bin = PathBuf::from("/bin/img2dcm");
    let argv = Img2dcmOptions::new("in.png", "out.dcm").build(&bin).unwrap();
    assert_eq!(argv, vec!["/bin/img2dcm", "in.png", "out.dcm"]);
}

#[test]
fn template_file_is_rendered_when_present() {
    let bin = PathBuf::from("/bin/img2dcm");
    let argv = Img2dcmOptions::new("in.png", "out.dcm").template_file("study.dcm").build(&bin).unwrap();
    assert_eq!(argv, vec!["/bin/img2dcm", "-stf", "study.dcm", "in.png", "out.dcm"]);
}

#[test]
fn rejects_traversal_in_template_file() {
    let bin = PathBuf::from("/bin/img2dcm");
    let opts = Img2dcmOptions::new("in.png", "out.dcm").template_file("../../etc/study.dcm");
    assert!(opts.build(&bin).is_err());
}
