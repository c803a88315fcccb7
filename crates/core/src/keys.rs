// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stable content-derived line keys
//!
//! The UI tracks line identity across polls by key, not by position, so an
//! inserted or removed line does not remount everything below it. Keys are a
//! short hash of the line text; duplicate content within one command result
//! gets a counter suffix.

use sha2::{Digest, Sha256};
use smol_str::SmolStr;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Hex characters kept from the content digest.
const PREFIX_LEN: usize = 8;

/// First [`PREFIX_LEN`] hex characters of the SHA-256 digest of `text`.
pub fn hash_prefix(text: &str) -> SmolStr {
    let digest = format!("{:x}", Sha256::digest(text.as_bytes()));
    SmolStr::new(&digest[..PREFIX_LEN])
}

/// Assigns keys to the lines of one command result.
///
/// The first occurrence of a content keeps the bare hash prefix; the n-th
/// duplicate gets `{prefix}-{n}`. State is scoped to one result: callers
/// create a fresh assigner per command per run, which is what keeps keys for
/// unchanged output identical across runs.
///
/// Two *different* contents sharing a truncated prefix will interleave their
/// counters. Known limitation, kept for brevity of the keys.
#[derive(Debug, Default)]
pub struct KeyAssigner {
    seen: HashMap<SmolStr, u32>,
}

impl KeyAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for the next line with this text.
    pub fn assign(&mut self, text: &str) -> SmolStr {
        let prefix = hash_prefix(text);
        match self.seen.entry(prefix.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(1);
                prefix
            }
            Entry::Occupied(mut slot) => {
                let count = slot.get_mut();
                let key = SmolStr::new(format!("{prefix}-{count}"));
                *count += 1;
                key
            }
        }
    }
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
