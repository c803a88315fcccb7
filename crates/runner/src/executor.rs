// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-command process execution

use std::process::Stdio;
use std::time::Instant;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::mpsc;

use crate::error::ExecError;
use vitals_core::{reassemble, Command, CommandResult, RawChunk, StreamTag};

const READ_BUF: usize = 4096;

/// Run one command to completion and reconstruct its output.
///
/// The process is spawned with stdin closed and both output streams piped.
/// One reader task per stream forwards raw reads over a channel; the
/// collector stamps each chunk with the shared arrival sequence number, so
/// ordering across the two streams is whatever the OS delivered. No fixed
/// relative order is assumed, and no chronological line merge is attempted
/// beyond segment grouping (see `vitals_core::reassemble`).
///
/// Resolves on process exit with any code. Spawn and wait failures return an
/// [`ExecError`] that still carries the lines captured so far. No timeout is
/// imposed here; a caller may wrap the future with a deadline.
pub async fn execute(command: &Command) -> Result<CommandResult, ExecError> {
    let start = Instant::now();
    let cmd_span = tracing::info_span!(
        "runner.exec",
        cmd = %command,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    let mut process = tokio::process::Command::new(command.program());
    process.args(command.args());
    process.stdin(Stdio::null());
    process.stdout(Stdio::piped());
    process.stderr(Stdio::piped());

    let mut child = match process.spawn() {
        Ok(child) => child,
        Err(source) => {
            let partial =
                CommandResult::failed(command.clone(), source.to_string(), Vec::new());
            return Err(ExecError::Spawn {
                command: command.to_string(),
                source,
                partial: Box::new(partial),
            });
        }
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    if let Some(stdout) = child.stdout.take() {
        tokio::spawn(read_stream(stdout, StreamTag::Stdout, tx.clone()));
    }
    if let Some(stderr) = child.stderr.take() {
        tokio::spawn(read_stream(stderr, StreamTag::Stderr, tx.clone()));
    }
    // Collector sees channel close once both readers hit end of stream.
    drop(tx);

    let collect = async {
        let mut chunks: Vec<RawChunk> = Vec::new();
        while let Some((stream, bytes)) = rx.recv().await {
            let seq = chunks.len() as u64;
            chunks.push(RawChunk::new(seq, stream, bytes));
        }
        chunks
    };
    let (status, chunks) = tokio::join!(child.wait(), collect);

    let duration = start.elapsed();
    let lines = reassemble(&chunks);

    match status {
        Ok(status) => {
            let exit_code = status.code().unwrap_or(-1);
            cmd_span.record("exit_code", exit_code);
            cmd_span.record("duration_ms", duration.as_millis() as u64);
            Ok(CommandResult::completed(command.clone(), exit_code, lines))
        }
        Err(source) => {
            let partial = CommandResult::failed(command.clone(), source.to_string(), lines);
            Err(ExecError::Wait {
                command: command.to_string(),
                source,
                partial: Box::new(partial),
            })
        }
    }
}

/// Forward raw reads from one stream until end of stream.
///
/// A read error is treated as end of stream for that stream only; the
/// process exit status decides the command's outcome.
async fn read_stream<R: AsyncRead + Unpin>(
    mut reader: R,
    stream: StreamTag,
    tx: mpsc::UnboundedSender<(StreamTag, Vec<u8>)>,
) {
    let mut buf = [0u8; READ_BUF];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => {
                if tx.send((stream, buf[..n].to_vec())).is_err() {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(%stream, %error, "stream read failed, treating as eof");
                break;
            }
        }
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
