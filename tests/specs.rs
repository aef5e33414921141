// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box scenario tests driving whole crates together against a fake
//! DCMTK installation, rather than any single crate's internals.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dcmtk_command::tools::StorescpOptions;
use dcmtk_command::ToolOptions;
use dcmtk_core::ValidationError;
use dcmtk_path::{PathResolver, REQUIRED_BINARIES};
use dcmtk_server::{ServerError, StorescpServer};
use serial_test::serial;
use tempfile::tempdir;
use tokio_util::sync::CancellationToken;

const FIXTURES: &str = env!("CARGO_MANIFEST_DIR");

fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURES).join("tests/fixtures/bin").join(name)
}

/// Builds a fake DCMTK root satisfying the required-binary manifest, with
/// `storescp` swapped in from `storescp_fixture`.
fn fake_root(storescp_fixture: &str) -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    let noop = fs::read(fixture("noop")).unwrap();
    for name in REQUIRED_BINARIES {
        if *name == "storescp" {
            continue;
        }
        let path = dir.path().join(name);
        fs::write(&path, &noop).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
    let storescp_path = dir.path().join("storescp");
    fs::copy(fixture(storescp_fixture), &storescp_path).unwrap();
    fs::set_permissions(&storescp_path, fs::Permissions::from_mode(0o755)).unwrap();
    dir
}

fn set_dcmtk_home(dir: &tempfile::TempDir) {
    std::env::set_var(dcmtk_core::DCMTK_HOME_ENV, dir.path());
    PathResolver::new().clear_cache();
}

fn unset_dcmtk_home() {
    std::env::remove_var(dcmtk_core::DCMTK_HOME_ENV);
    PathResolver::new().clear_cache();
}

/// Scenario 1: happy-path send/receive. A fake `storescp` plays back the
/// log lines DCMTK emits for one stored file; the server should surface
/// the full association lifecycle and the output directory should contain
/// the stored file.
#[tokio::test]
#[serial]
async fn happy_path_store_emits_the_expected_event_sequence() {
    let root = fake_root("storescp_happy_path");
    set_dcmtk_home(&root);

    let output_dir = tempdir().unwrap();
    let options = StorescpOptions::new(11112, "STORESCP", output_dir.path());

    let events: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

    let mut server = StorescpServer::create(options, CancellationToken::new()).await.unwrap();
    {
        let events = events.clone();
        server.on_association_received(move |_| events.lock().unwrap().push("ASSOCIATION_RECEIVED".to_string()));
    }
    {
        let events = events.clone();
        server.on_storing_file(move |_| events.lock().unwrap().push("STORING_FILE".to_string()));
    }
    {
        let events = events.clone();
        server.on_stored_file(move |_| events.lock().unwrap().push("STORED_FILE".to_string()));
    }

    tokio::time::sleep(Duration::from_millis(800)).await;
    server.stop().await.unwrap();
    unset_dcmtk_home();

    let seen = events.lock().unwrap().clone();
    assert_eq!(seen, vec!["ASSOCIATION_RECEIVED", "STORING_FILE", "STORED_FILE"]);

    let stored = output_dir.path().join("DICOM").join("sample.dcm");
    assert!(stored.exists(), "expected {} to exist", stored.display());
}

/// Scenario 2: port-busy startup. A fake `storescp` immediately reports it
/// cannot bind its port and exits; `create` must fail rather than hand back
/// a server that never reaches RUNNING.
#[tokio::test]
#[serial]
async fn port_busy_startup_fails_create_instead_of_hanging() {
    let root = fake_root("storescp_port_busy");
    set_dcmtk_home(&root);

    let output_dir = tempdir().unwrap();
    let options = StorescpOptions::new(11113, "STORESCP", output_dir.path());
    let result = StorescpServer::create(options, CancellationToken::new()).await;
    unset_dcmtk_home();

    assert!(matches!(result, Err(ServerError::Proc(_))), "expected a Proc error, got {result:?}");
}

/// Scenario 3: cancel during run. Cancelling a running server's token must
/// drain it to STOPPED well within the drain timeout.
#[tokio::test]
#[serial]
async fn cancel_during_run_stops_the_server() {
    let root = fake_root("storescp_long_running");
    set_dcmtk_home(&root);

    let output_dir = tempdir().unwrap();
    let options = StorescpOptions::new(11114, "STORESCP", output_dir.path());
    let cancel = CancellationToken::new();

    let mut server = StorescpServer::create(options, cancel.clone()).await.unwrap();
    assert_eq!(server.state(), dcmtk_core::ProcessState::Running);

    cancel.cancel();
    tokio::time::sleep(Duration::from_secs(4)).await;
    unset_dcmtk_home();

    assert_eq!(server.state(), dcmtk_core::ProcessState::Stopped);
}

/// Scenario 5: path traversal rejection. No subprocess should ever be
/// spawned for a rejected option record.
#[test]
fn path_traversal_is_rejected_before_any_argv_is_built() {
    let options = StorescpOptions::new(11112, "STORESCP", "/var/run/../../etc");
    let result = options.build(Path::new("/usr/bin/storescp"));
    assert!(matches!(result, Err(ValidationError::PathTraversal { .. })));
}
