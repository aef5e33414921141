// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[yare::parameterized(
    plain_dotdot = { "../etc/passwd" },
    embedded = { "/var/run/../../etc" },
    windows_style = { r"C:\data\..\secrets" },
    trailing = { "/tmp/.." },
)]
fn rejects_traversal_segments(value: &str) {
    assert!(path_segment("storescp", "outputDirectory", value).is_err());
}

#[yare::parameterized(
    plain = { "/var/data/incoming" },
    dotted_name = { "/var/data/my..dir" },
    hidden = { "/var/data/.hidden" },
)]
fn accepts_non_traversal_paths(value: &str) {
    assert!(path_segment("storescp", "outputDirectory", value).is_ok());
}

#[test]
fn port_range() {
    assert!(port("storescp", "port", 0).is_err());
    assert!(port("storescp", "port", 65536).is_err());
    assert_eq!(port("storescp", "port", 104).unwrap(), 104);
    assert_eq!(port("storescp", "port", 65535).unwrap(), 65535);
}

#[test]
fn ae_title_bounds() {
    assert!(ae_title("storescp", "aeTitle", "").is_err());
    assert!(ae_title("storescp", "aeTitle", "THIS_IS_WAY_TOO_LONG_AE").is_err());
    assert!(ae_title("storescp", "aeTitle", "bad title").is_err());
    assert!(ae_title("storescp", "aeTitle", "STORESCP").is_ok());
    assert!(ae_title("storescp", "aeTitle", "a").is_ok());
}

proptest! {
    #[test]
    fn traversal_pattern_never_panics(s in ".*") {
        let _ = path_segment("t", "f", &s);
    }

    #[test]
    fn any_string_without_dotdot_is_accepted(s in "[a-zA-Z0-9/_-]{0,64}") {
        prop_assert!(path_segment("t", "f", &s).is_ok());
    }
}
