// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reconstructed output lines

use crate::chunk::StreamTag;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// One reconstructed line of command output.
///
/// The text never contains a newline; it may be empty. `pos` is the line's
/// position within its command result, counted across both streams. It is
/// not part of the wire payload; clients key off `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Stream the line's segment came from.
    pub stream: StreamTag,
    /// Line text without the trailing newline.
    #[serde(rename = "line")]
    pub text: String,
    /// Stable content-derived render key.
    pub key: SmolStr,
    #[serde(skip)]
    pub pos: usize,
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
