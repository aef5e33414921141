// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-tool option schemas.
//!
//! The full option→flag mapping for DCMTK's ~40 binaries is an external,
//! mechanical data table — out of scope here. These cover every result
//! shape the rest of the workspace needs to exercise (every long-lived
//! server binary, a one-shot SCU, a query/retrieve pair, and a local
//! file-transform tool) and are transcribed from the corresponding DCMTK
//! man pages.

pub mod dcmconv;
pub mod dcmdump;
pub mod dcmprscp;
pub mod dcmpsrcv;
pub mod dcmqrscp;
pub mod dcmrecv;
pub mod dcmsend;
pub mod echoscu;
pub mod findscu;
pub mod img2dcm;
pub mod movescu;
pub mod storescp;
pub mod storescu;
pub mod wlmscpfs;

pub use dcmconv::{DcmconvOptions, TransferSyntax};
pub use dcmdump::DcmdumpOptions;
pub use dcmprscp::DcmprscpOptions;
pub use dcmpsrcv::DcmpsrcvOptions;
pub use dcmqrscp::DcmqrscpOptions;
pub use dcmrecv::DcmrecvOptions;
pub use dcmsend::DcmsendOptions;
pub use echoscu::EchoscuOptions;
pub use findscu::FindscuOptions;
pub use img2dcm::Img2dcmOptions;
pub use movescu::MovescuOptions;
pub use storescp::StorescpOptions;
pub use storescu::StorescuOptions;
pub use wlmscpfs::WlmscpfsOptions;
