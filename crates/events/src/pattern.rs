// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declares what a line or a run of lines must look like to become a
//! [`MatchRecord`](dcmtk_core::MatchRecord).

use regex::Regex;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Turns a regex capture into the opaque payload carried on a match.
///
/// Must be pure and non-blocking: no I/O, no locking beyond what `Arc`
/// itself needs.
pub type Processor = Arc<dyn Fn(&regex::Captures<'_>) -> Value + Send + Sync>;

/// A single registered pattern: either a one-line match or a
/// header/footer-delimited block spanning several lines.
#[derive(Clone)]
pub enum EventPattern {
    Single {
        event: &'static str,
        regex: Regex,
        processor: Processor,
    },
    Block {
        event: &'static str,
        header: Regex,
        footer: Regex,
        body: Regex,
        max_lines: usize,
        timeout: Option<Duration>,
        processor: Processor,
    },
}

impl EventPattern {
    pub fn event(&self) -> &'static str {
        match self {
            EventPattern::Single { event, .. } => event,
            EventPattern::Block { event, .. } => event,
        }
    }

    pub fn single(event: &'static str, regex: Regex, processor: Processor) -> Self {
        EventPattern::Single { event, regex, processor }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn block(
        event: &'static str,
        header: Regex,
        footer: Regex,
        body: Regex,
        max_lines: usize,
        timeout: Option<Duration>,
        processor: Processor,
    ) -> Self {
        EventPattern::Block { event, header, footer, body, max_lines, timeout, processor }
    }
}

/// Builds a [`Processor`] that ignores the capture and always returns the
/// same static payload shape — the common case for patterns whose line
/// carries no useful fields beyond having matched.
pub fn empty_processor() -> Processor {
    Arc::new(|_captures| Value::Object(serde_json::Map::new()))
}

/// Builds a [`Processor`] that copies one named capture group into a
/// single-key JSON object.
pub fn field_processor(field: &'static str, group: &'static str) -> Processor {
    Arc::new(move |captures| {
        let mut map = serde_json::Map::new();
        if let Some(m) = captures.name(group) {
            map.insert(field.to_string(), Value::String(m.as_str().to_string()));
        }
        Value::Object(map)
    })
}
