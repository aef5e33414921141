// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One module per long-lived DCMTK server binary.

pub mod dcmprscp;
pub mod dcmpsrcv;
pub mod dcmqrscp;
pub mod dcmrecv;
pub mod storescp;
pub mod wlmscpfs;

pub use dcmprscp::{DcmprscpServer, DCMPRSCP_SETTLE};
pub use dcmpsrcv::{DcmpsrcvServer, DCMPSRCV_SETTLE};
pub use dcmqrscp::{DcmqrscpServer, DCMQRSCP_SETTLE};
pub use dcmrecv::{DcmrecvServer, DCMRECV_SETTLE};
pub use storescp::{StorescpServer, STORESCP_SETTLE};
pub use wlmscpfs::{WlmscpfsServer, WLMSCPFS_SETTLE};
