// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw output chunks as delivered by the operating system

use serde::{Deserialize, Serialize};

/// Which output stream a chunk or line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamTag {
    Stdout,
    Stderr,
}

impl std::fmt::Display for StreamTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamTag::Stdout => write!(f, "stdout"),
            StreamTag::Stderr => write!(f, "stderr"),
        }
    }
}

/// One read from a child process stream, exactly as the OS delivered it.
///
/// `seq` is the arrival order across *both* streams of one execution, not a
/// per-stream counter. Making it an explicit field keeps chunk ordering a
/// data invariant rather than an artifact of reader-task scheduling. Chunks
/// never outlive the execution that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
    /// Arrival position, strictly increasing within one execution.
    pub seq: u64,
    /// Stream the bytes were read from.
    pub stream: StreamTag,
    /// Chunk payload; does not align with line boundaries.
    pub bytes: Vec<u8>,
}

impl RawChunk {
    pub fn new(seq: u64, stream: StreamTag, bytes: impl Into<Vec<u8>>) -> Self {
        Self { seq, stream, bytes: bytes.into() }
    }
}

#[cfg(test)]
#[path = "chunk_tests.rs"]
mod tests;
