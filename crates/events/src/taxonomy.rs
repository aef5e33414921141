// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default pattern sets and fatal-event sets for each long-lived server
//! binary. Each set is a curated subset of the shared event taxonomy:
//! association lifecycle events are common to every binary; request and
//! storage events are specific to what the binary actually does.

use crate::pattern::{empty_processor, field_processor, EventPattern};
use regex::Regex;

/// A long-lived DCMTK server binary that emits a pattern set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerBinary {
    Storescp,
    Dcmrecv,
    Dcmqrscp,
    Dcmpsrcv,
    Dcmprscp,
    Wlmscpfs,
}

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| {
        unreachable!("static taxonomy pattern {pattern:?} must compile: {err}")
    })
}

fn association_lifecycle() -> Vec<EventPattern> {
    vec![
        EventPattern::single(
            "LISTENING",
            re(r"^Listening on port (?P<port>\d+)$"),
            field_processor("port", "port"),
        ),
        EventPattern::single(
            "ASSOCIATION_RECEIVED",
            re(r"^Association Received from (?P<callingAeTitle>\S+) @ (?P<address>\S+)$"),
            association_received_processor(),
        ),
        EventPattern::single("ASSOCIATION_ACKNOWLEDGED", re(r"^Association Acknowledged"), empty_processor()),
        EventPattern::single("ECHO_REQUEST", re(r"^Received Echo Request$"), empty_processor()),
        EventPattern::single(
            "REFUSING_ASSOCIATION",
            re(r"^(Association Rejected|Refusing Association): (?P<reason>.+)$"),
            field_processor("reason", "reason"),
        ),
        EventPattern::single("ASSOCIATION_RELEASE", re(r"^Association Release"), empty_processor()),
        EventPattern::single("ASSOCIATION_ABORTED", re(r"^Association Aborted"), empty_processor()),
        EventPattern::single(
            "CANNOT_START_LISTENER",
            re(r"^Cannot listen on port (?P<port>\d+)"),
            field_processor("port", "port"),
        ),
        EventPattern::single("TERMINATING", re(r"^Terminating$"), empty_processor()),
    ]
}

fn association_received_processor() -> crate::pattern::Processor {
    std::sync::Arc::new(|captures: &regex::Captures<'_>| {
        let mut map = serde_json::Map::new();
        if let Some(m) = captures.name("callingAeTitle") {
            map.insert("callingAeTitle".to_string(), serde_json::Value::String(m.as_str().to_string()));
        }
        if let Some(m) = captures.name("address") {
            map.insert("address".to_string(), serde_json::Value::String(m.as_str().to_string()));
        }
        serde_json::Value::Object(map)
    })
}

fn storage_events() -> Vec<EventPattern> {
    vec![
        EventPattern::single("C_STORE_REQUEST", re(r"^Received Store Request$"), empty_processor()),
        EventPattern::single(
            "SUBDIRECTORY_CREATED",
            re(r"^Creating Subdirectory: (?P<path>.+)$"),
            field_processor("path", "path"),
        ),
        EventPattern::single(
            "STORING_FILE",
            re(r"^Storing file: (?P<filePath>.+)$"),
            field_processor("filePath", "filePath"),
        ),
        EventPattern::single(
            "STORED_FILE",
            re(r"^Store Done: (?P<filePath>.+)$"),
            field_processor("filePath", "filePath"),
        ),
    ]
}

fn query_retrieve_events() -> Vec<EventPattern> {
    vec![
        EventPattern::single("C_FIND_REQUEST", re(r"^Received Find Request$"), empty_processor()),
        EventPattern::single("C_MOVE_REQUEST", re(r"^Received Move Request$"), empty_processor()),
        EventPattern::single("C_GET_REQUEST", re(r"^Received Get Request$"), empty_processor()),
        EventPattern::single("DATABASE_READY", re(r"^Database Ready$"), empty_processor()),
        EventPattern::single(
            "FILE_DELETED",
            re(r"^Deleting file: (?P<filePath>.+)$"),
            field_processor("filePath", "filePath"),
        ),
        EventPattern::single(
            "CONFIG_ERROR",
            re(r"^Error in config file: (?P<message>.+)$"),
            field_processor("message", "message"),
        ),
    ]
}

/// Builds the registration-ordered pattern set for one server binary.
///
/// Association-lifecycle patterns always come first so that, per
/// first-match-wins dispatch, a binary-specific request pattern never
/// shadows a generic lifecycle line with an accidental overlap.
pub fn pattern_set(binary: ServerBinary) -> Vec<EventPattern> {
    let mut patterns = association_lifecycle();
    match binary {
        ServerBinary::Storescp | ServerBinary::Dcmrecv => {
            patterns.extend(storage_events());
        }
        ServerBinary::Dcmqrscp => {
            patterns.extend(storage_events());
            patterns.extend(query_retrieve_events());
        }
        ServerBinary::Dcmpsrcv => {
            patterns.extend(storage_events());
        }
        ServerBinary::Dcmprscp => {
            patterns.push(EventPattern::single(
                "CONFIG_ERROR",
                re(r"^Error in config file: (?P<message>.+)$"),
                field_processor("message", "message"),
            ));
        }
        ServerBinary::Wlmscpfs => {
            patterns.push(EventPattern::single("C_FIND_REQUEST", re(r"^Received Find Request$"), empty_processor()));
            patterns.push(EventPattern::single("DATABASE_READY", re(r"^Database Ready$"), empty_processor()));
            patterns.push(EventPattern::single(
                "CONFIG_ERROR",
                re(r"^Error in config file: (?P<message>.+)$"),
                field_processor("message", "message"),
            ));
        }
    }
    patterns
}

/// Event names that must additionally surface as `error(fatal: true)`
/// because the process cannot continue once they occur.
pub fn fatal_events(binary: ServerBinary) -> &'static [&'static str] {
    match binary {
        ServerBinary::Storescp | ServerBinary::Dcmrecv | ServerBinary::Dcmpsrcv => {
            &["CANNOT_START_LISTENER"]
        }
        ServerBinary::Dcmqrscp | ServerBinary::Wlmscpfs => &["CANNOT_START_LISTENER", "CONFIG_ERROR"],
        ServerBinary::Dcmprscp => &["CANNOT_START_LISTENER", "CONFIG_ERROR"],
    }
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;
