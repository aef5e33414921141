// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Matches fed lines against a registered pattern set: single-line matches
//! and header/footer-delimited multi-line blocks, first-match-wins.

use crate::error::PatternError;
use crate::pattern::EventPattern;
use dcmtk_core::{Clock, MatchRecord, SystemClock, MAX_PATTERNS};
use std::time::Instant;

/// What `feed` or `check_timeout` produced for one line (or one tick).
#[derive(Debug, Clone, PartialEq)]
pub enum ParseEvent {
    Match(MatchRecord),
    BlockTimeout { event: &'static str, lines: Vec<String> },
}

struct ActiveBlock {
    pattern_index: usize,
    lines: Vec<String>,
    deadline: Option<Instant>,
}

/// Stateful line-by-line matcher. One instance belongs to exactly one
/// supervisor; it is never shared.
pub struct EventParser<C: Clock = SystemClock> {
    patterns: Vec<EventPattern>,
    active: Option<ActiveBlock>,
    clock: C,
}

impl EventParser<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for EventParser<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> EventParser<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { patterns: Vec::new(), active: None, clock }
    }

    pub fn add_pattern(&mut self, pattern: EventPattern) -> Result<(), PatternError> {
        if self.patterns.len() >= MAX_PATTERNS {
            return Err(PatternError::CapExceeded { max: MAX_PATTERNS });
        }
        self.patterns.push(pattern);
        Ok(())
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Abandons any active block and forgets nothing else; registered
    /// patterns are untouched.
    pub fn reset(&mut self) {
        self.active = None;
    }

    /// Whether a multi-line block is currently accumulating. Callers that
    /// drive `check_timeout` off a wall-clock tick use this to avoid
    /// polling when there is nothing to time out.
    pub fn has_active_block(&self) -> bool {
        self.active.is_some()
    }

    /// Feeds one line (without its terminator). Returns at most one event:
    /// a `Match` outside a block, or a `Match`/`BlockTimeout`/nothing when
    /// the footer of an active block matches.
    pub fn feed(&mut self, line: &str) -> Option<ParseEvent> {
        if self.active.is_some() {
            return self.feed_into_block(line);
        }

        if let Some(index) = self.first_header_match(line) {
            let timeout = match &self.patterns[index] {
                EventPattern::Block { timeout, .. } => *timeout,
                EventPattern::Single { .. } => None,
            };
            self.active = Some(ActiveBlock {
                pattern_index: index,
                lines: vec![line.to_string()],
                deadline: timeout.map(|d| self.clock.now() + d),
            });
            return None;
        }

        self.first_single_line_match(line)
    }

    /// Called by the owning supervisor on its own timer tick; fires the
    /// block's `blockTimeout` once its deadline has passed even if no new
    /// line ever arrives to trigger the maxLines check.
    pub fn check_timeout(&mut self) -> Option<ParseEvent> {
        let deadline = self.active.as_ref()?.deadline?;
        if self.clock.now() < deadline {
            return None;
        }
        let block = self.active.take().expect("checked Some above");
        let event = self.patterns[block.pattern_index].event();
        Some(ParseEvent::BlockTimeout { event, lines: block.lines })
    }

    fn first_header_match(&self, line: &str) -> Option<usize> {
        self.patterns.iter().position(|p| match p {
            EventPattern::Block { header, .. } => header.is_match(line),
            EventPattern::Single { .. } => false,
        })
    }

    fn first_single_line_match(&self, line: &str) -> Option<ParseEvent> {
        for pattern in &self.patterns {
            if let EventPattern::Single { regex, event, processor } = pattern {
                if let Some(captures) = regex.captures(line) {
                    return Some(ParseEvent::Match(MatchRecord::new(*event, processor(&captures))));
                }
            }
        }
        None
    }

    fn feed_into_block(&mut self, line: &str) -> Option<ParseEvent> {
        let pattern_index = self.active.as_ref().expect("checked Some by caller").pattern_index;
        self.active.as_mut().expect("checked Some by caller").lines.push(line.to_string());

        let EventPattern::Block { footer, body, event, processor, max_lines, .. } =
            &self.patterns[pattern_index]
        else {
            unreachable!("active block always indexes a Block pattern")
        };

        if footer.is_match(line) {
            let block = self.active.take().expect("checked Some above");
            let joined = block.lines.join("\n");
            return body
                .captures(&joined)
                .map(|captures| ParseEvent::Match(MatchRecord::new(*event, processor(&captures))));
        }

        let reached_cap = self.active.as_ref().expect("checked Some above").lines.len() >= *max_lines;
        if reached_cap {
            let block = self.active.take().expect("checked Some above");
            return Some(ParseEvent::BlockTimeout { event: *event, lines: block.lines });
        }

        None
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
