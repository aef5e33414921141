// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The required-binary manifest: the set of DCMTK tools that must be
//! present (and executable) in a directory for it to be accepted as a
//! usable installation root.

/// Binaries that must exist for a directory to satisfy resolution.
///
/// This is deliberately a curated subset, not the full ~40-tool DCMTK
/// distribution: a directory missing an exotic tool the host never
/// invokes should still resolve.
pub const REQUIRED_BINARIES: &[&str] = &[
    "storescp",
    "storescu",
    "dcmrecv",
    "dcmsend",
    "echoscu",
    "findscu",
    "movescu",
    "getscu",
    "dcmqrscp",
    "dcm2xml",
    "xml2dcm",
    "dcm2json",
    "dcmdump",
    "dcmodify",
    "dcmconv",
    "img2dcm",
    "dcmftest",
];

/// Extra binaries resolved (and cached) if present, but not required for a
/// directory to satisfy the manifest. Server wrappers that need one of
/// these fail at `ServerShell::create` time, not at resolution time.
pub const OPTIONAL_BINARIES: &[&str] = &["dcmpsrcv", "dcmprscp", "wlmscpfs"];
