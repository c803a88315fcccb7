// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Concurrent fan-out over the command list

use futures_util::future::join_all;

use crate::executor::execute;
use vitals_core::{Command, Snapshot};

/// Execute every command concurrently and assemble one snapshot.
///
/// All executions settle before this resolves; a failing command never
/// aborts its siblings. `join_all` keeps result order aligned with input
/// order whatever order executions finish in, so `results()[i]` always
/// belongs to `commands[i]`. The list is small and operator-controlled, so
/// fan-out is uncapped.
pub async fn run_all(commands: &[Command]) -> Snapshot {
    let results = join_all(commands.iter().map(|command| async move {
        match execute(command).await {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!(cmd = %command, %error, "command execution failed");
                error.into_partial()
            }
        }
    }))
    .await;
    Snapshot::new(results)
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
