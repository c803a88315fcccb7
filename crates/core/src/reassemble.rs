// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line reconstruction from raw chunks
//!
//! A child's `write()` does not align with line boundaries, and stdout/stderr
//! interleave unpredictably at the OS level. Chunks are therefore grouped
//! into maximal runs of one stream tag (segments) before splitting: a line
//! delivered in two reads is never corrupted, and the two streams are never
//! falsely merged into one chronological line interleave the source data
//! cannot support.

use crate::chunk::{RawChunk, StreamTag};
use crate::keys::KeyAssigner;
use crate::line::Line;

/// Reconstruct keyed lines from the chunks of one execution.
///
/// Chunks must be in arrival order (callers pass the accumulated list, whose
/// `seq` fields are already strictly increasing). Segment order is preserved
/// in the output; one key assigner spans the whole result so duplicate
/// content is disambiguated across segments too.
pub fn reassemble(chunks: &[RawChunk]) -> Vec<Line> {
    let mut assigner = KeyAssigner::new();
    let mut lines = Vec::new();

    for (stream, text) in segments(chunks) {
        let mut parts: Vec<&str> = text.split('\n').collect();
        // A trailing newline splits off a spurious empty tail. A segment
        // that is empty altogether keeps its single empty line: the process
        // really wrote nothing before the stream switched.
        if parts.len() > 1 && parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }
        for part in parts {
            let pos = lines.len();
            lines.push(Line {
                stream,
                key: assigner.assign(part),
                text: part.to_string(),
                pos,
            });
        }
    }

    lines
}

/// Partition chunks into maximal same-stream runs and decode each run.
///
/// Boundaries occur only where the stream tag changes, never on a size or
/// time boundary. Bytes are concatenated per segment before decoding so a
/// UTF-8 sequence split across two reads survives.
fn segments(chunks: &[RawChunk]) -> Vec<(StreamTag, String)> {
    let mut runs: Vec<(StreamTag, Vec<u8>)> = Vec::new();
    for chunk in chunks {
        match runs.last_mut() {
            Some((stream, bytes)) if *stream == chunk.stream => {
                bytes.extend_from_slice(&chunk.bytes);
            }
            _ => runs.push((chunk.stream, chunk.bytes.clone())),
        }
    }
    runs.into_iter()
        .map(|(stream, bytes)| (stream, String::from_utf8_lossy(&bytes).into_owned()))
        .collect()
}

#[cfg(test)]
#[path = "reassemble_tests.rs"]
mod tests;
