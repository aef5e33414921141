// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use tokio::io::AsyncWriteExt;

async fn collect(bytes: &[u8], max_line_bytes: usize) -> Vec<LineRecord> {
    let (mut writer, reader) = tokio::io::duplex(64 * 1024);
    let owned = bytes.to_vec();
    let write_task = tokio::spawn(async move {
        writer.write_all(&owned).await.unwrap();
        writer.shutdown().await.unwrap();
    });
    let mut extractor = LineExtractor::with_max_line_bytes(reader, StreamSource::Stdout, max_line_bytes);
    let mut out = Vec::new();
    while let Some(line) = extractor.next_line().await {
        out.push(line);
    }
    write_task.await.unwrap();
    out
}

#[tokio::test]
async fn splits_on_lf() {
    let lines = collect(b"one\ntwo\nthree\n", DEFAULT_MAX_LINE_BYTES).await;
    let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn splits_on_crlf() {
    let lines = collect(b"one\r\ntwo\r\n", DEFAULT_MAX_LINE_BYTES).await;
    let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[tokio::test]
async fn flushes_residual_partial_line_on_close() {
    let lines = collect(b"complete\nincomplete-tail", DEFAULT_MAX_LINE_BYTES).await;
    let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["complete", "incomplete-tail"]);
}

#[tokio::test]
async fn preserves_fifo_order_within_one_stream() {
    let lines = collect(b"a\nb\nc\nd\ne\n", DEFAULT_MAX_LINE_BYTES).await;
    let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn overflow_emits_one_truncation_record_and_resets() {
    let max = 64;
    let mut payload = vec![b'x'; max * 2];
    payload.push(b'\n');
    payload.extend_from_slice(b"next-line\n");
    let lines = collect(&payload, max).await;

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].text, truncation_marker(max));
    assert_eq!(lines[1].text, "next-line");
}

#[tokio::test]
async fn empty_stream_yields_no_lines() {
    let lines = collect(b"", DEFAULT_MAX_LINE_BYTES).await;
    assert!(lines.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // V7: concatenating emitted texts (rejoined with '\n') equals the input
    // minus its trailing newline, for any newline-terminated byte sequence
    // free of embedded NUL/CR noise that would make the comparison ambiguous.
    #[test]
    fn round_trips_newline_terminated_ascii(lines in proptest::collection::vec("[a-zA-Z0-9 ]{0,40}", 0..20)) {
        let mut input = lines.join("\n");
        input.push('\n');
        let bytes = input.clone().into_bytes();

        let rt = tokio::runtime::Runtime::new().unwrap();
        let records = rt.block_on(collect(&bytes, DEFAULT_MAX_LINE_BYTES));
        let rejoined = records.into_iter().map(|r| r.text).collect::<Vec<_>>().join("\n");

        prop_assert_eq!(rejoined, input.trim_end_matches('\n'));
    }
}
