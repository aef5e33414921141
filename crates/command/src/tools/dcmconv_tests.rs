// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::PathBuf;

#[yare::parameterized(
    explicit_le = { TransferSyntax::ExplicitLittleEndian, "+te" },
    explicit_be = { TransferSyntax::ExplicitBigEndian, "+tb" },
    implicit_le = { TransferSyntax::ImplicitLittleEndian, "+ti" },
)]
fn transfer_syntax_maps_to_flag(ts: TransferSyntax, flag: &str) {
    let bin = PathBuf::from("/bin/dcmconv");
    let argv = DcmconvOptions::new("in.dcm", "out.dcm", ts).build(&bin).unwrap();
    assert_eq!(argv, vec!["/bin/dcmconv", flag, "in.dcm", "out.dcm"]);
}

#[test]
fn rejects_traversal_output() {
    let bin = PathBuf::from("/bin/dcmconv");
    let opts = DcmconvOptions::new("in.dcm", "../../etc/out.dcm", TransferSyntax::ExplicitLittleEndian);
    assert!(opts.build(&bin).is_err());
}
