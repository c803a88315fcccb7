// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-configured command tokens

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors constructing a [`Command`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A command needs at least a program name.
    #[error("command has no tokens")]
    Empty,
}

/// One diagnostic command: program name plus arguments.
///
/// Identity is the exact token sequence. Commands are configured once at
/// startup and never mutated; the whole list is shared read-only across runs.
///
/// Serializes as a plain token array (`["ps", "axuf"]`); deserialization
/// rejects an empty array so malformed config fails at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Command(Vec<String>);

impl Command {
    /// Build a command from tokens. At least one token (the program) is
    /// required.
    pub fn new(tokens: Vec<String>) -> Result<Self, CommandError> {
        if tokens.is_empty() {
            return Err(CommandError::Empty);
        }
        Ok(Self(tokens))
    }

    /// The program name (argv\[0\]).
    pub fn program(&self) -> &str {
        // Invariant: the token vector is non-empty past construction.
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    /// The arguments (argv\[1..\]).
    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    /// All tokens, program first.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for Command {
    type Error = CommandError;

    fn try_from(tokens: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(tokens)
    }
}

impl From<Command> for Vec<String> {
    fn from(cmd: Command) -> Self {
        cmd.0
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
