// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-command results and the snapshot payload

use crate::chunk::StreamTag;
use crate::command::Command;
use crate::line::Line;
use serde::{Deserialize, Serialize};

/// How one command's execution ended.
///
/// A process that runs to exit is `Completed` whatever its exit code; a
/// diagnostic command returning 1 still produced output worth rendering.
/// `Failed` means the process could not be executed at all (spawn error,
/// wait error); partial output captured before the failure is kept on the
/// surrounding [`CommandResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExecOutcome {
    Completed {
        exit_code: i32,
    },
    Failed {
        error: String,
    },
}

impl ExecOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecOutcome::Completed { .. })
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }
}

/// One command together with its reconstructed output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub cmd: Command,
    pub outcome: ExecOutcome,
    pub lines: Vec<Line>,
}

impl CommandResult {
    /// Result for a process that ran to exit.
    pub fn completed(cmd: Command, exit_code: i32, lines: Vec<Line>) -> Self {
        Self { cmd, outcome: ExecOutcome::Completed { exit_code }, lines }
    }

    /// Result for a process that could not be executed. `lines` carries
    /// whatever partial output was accumulated: diagnostic output is part
    /// of the error signal, never discarded.
    pub fn failed(cmd: Command, error: impl Into<String>, lines: Vec<Line>) -> Self {
        Self { cmd, outcome: ExecOutcome::Failed { error: error.into() }, lines }
    }

    /// Lines from one stream, in order.
    pub fn lines_for(&self, stream: StreamTag) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |l| l.stream == stream)
    }
}

/// One complete pass over the configured command list.
///
/// Immutable once constructed; the next pass supersedes it wholesale. Result
/// order always matches configured command order, whatever order executions
/// finished in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    results: Vec<CommandResult>,
}

impl Snapshot {
    pub fn new(results: Vec<CommandResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[CommandResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl std::ops::Index<usize> for Snapshot {
    type Output = CommandResult;

    fn index(&self, i: usize) -> &CommandResult {
        &self.results[i]
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
