// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution errors carrying partial output

use thiserror::Error;
use vitals_core::CommandResult;

/// Errors from executing one command.
///
/// Every variant owns the partial [`CommandResult`] accumulated before the
/// failure; callers must not lose diagnostic output on an error path. A
/// stream closing mid-read is *not* an error; it is treated as end of stream
/// and the command still resolves on process exit.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The OS could not start the process (missing executable, permission
    /// denied).
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
        partial: Box<CommandResult>,
    },

    /// The process started but its exit status could not be collected.
    #[error("failed waiting on `{command}`: {source}")]
    Wait {
        command: String,
        source: std::io::Error,
        partial: Box<CommandResult>,
    },
}

impl ExecError {
    /// The failed result, with whatever lines were captured.
    pub fn into_partial(self) -> CommandResult {
        match self {
            ExecError::Spawn { partial, .. } | ExecError::Wait { partial, .. } => *partial,
        }
    }
}
