// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turns one raw async byte stream into a lazy sequence of [`LineRecord`]s.

use dcmtk_core::{LineRecord, StreamSource};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Default cap on a single unterminated line before it is treated as a
/// wedged/adversarial stream.
pub const DEFAULT_MAX_LINE_BYTES: usize = 1024 * 1024;

const READ_CHUNK: usize = 8 * 1024;

/// Marker text for the synthetic record emitted when a stream exceeds
/// `max_line_bytes` without a newline.
pub fn truncation_marker(max_line_bytes: usize) -> String {
    format!("<truncated: line exceeded {max_line_bytes} bytes>")
}

/// Reads newline-delimited [`LineRecord`]s out of an `AsyncRead`.
///
/// Holds at most one partial line in an internal buffer. `\n` and `\r\n`
/// are both accepted as line terminators; the terminator itself is never
/// included in the emitted text.
pub struct LineExtractor<R> {
    reader: R,
    source: StreamSource,
    buf: Vec<u8>,
    max_line_bytes: usize,
    eof: bool,
}

impl<R: AsyncRead + Unpin> LineExtractor<R> {
    pub fn new(reader: R, source: StreamSource) -> Self {
        Self::with_max_line_bytes(reader, source, DEFAULT_MAX_LINE_BYTES)
    }

    pub fn with_max_line_bytes(reader: R, source: StreamSource, max_line_bytes: usize) -> Self {
        Self { reader, source, buf: Vec::new(), max_line_bytes, eof: false }
    }

    /// Produce the next line, or `None` once the stream is exhausted and
    /// any residual partial line has been flushed.
    pub async fn next_line(&mut self) -> Option<LineRecord> {
        loop {
            if let Some(end) = find_terminator(&self.buf) {
                return Some(self.take_line(end));
            }

            if self.buf.len() >= self.max_line_bytes {
                tracing::warn!(
                    source = %self.source,
                    max_line_bytes = self.max_line_bytes,
                    "line buffer overflow; emitting truncation record and resetting"
                );
                let text = truncation_marker(self.max_line_bytes);
                self.buf.clear();
                return Some(LineRecord::new(self.source, text));
            }

            if self.eof {
                if self.buf.is_empty() {
                    return None;
                }
                let text = String::from_utf8_lossy(&self.buf).into_owned();
                self.buf.clear();
                return Some(LineRecord::new(self.source, text));
            }

            let mut chunk = [0u8; READ_CHUNK];
            match self.reader.read(&mut chunk).await {
                Ok(0) => self.eof = true,
                Ok(n) => self.buf.extend_from_slice(&chunk[..n]),
                Err(err) => {
                    tracing::warn!(source = %self.source, error = %err, "stream read failed; treating as EOF");
                    self.eof = true;
                }
            }
        }
    }

    /// Byte offset of the terminator, with the terminator stripped, consumed
    /// from `self.buf`.
    fn take_line(&mut self, term: Terminator) -> LineRecord {
        let text = String::from_utf8_lossy(&self.buf[..term.text_end]).into_owned();
        self.buf.drain(..term.consumed);
        LineRecord::new(self.source, text)
    }
}

struct Terminator {
    /// Length of the line text, excluding the terminator.
    text_end: usize,
    /// Total bytes (text + terminator) to remove from the buffer.
    consumed: usize,
}

fn find_terminator(buf: &[u8]) -> Option<Terminator> {
    let nl = buf.iter().position(|&b| b == b'\n')?;
    if nl > 0 && buf[nl - 1] == b'\r' {
        Some(Terminator { text_end: nl - 1, consumed: nl + 1 })
    } else {
        Some(Terminator { text_end: nl, consumed: nl + 1 })
    }
}

#[cfg(test)]
#[path = "extractor_tests.rs"]
mod tests;
