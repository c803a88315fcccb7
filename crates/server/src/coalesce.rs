// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot request coalescing
//!
//! Many pollers, one batch: all snapshot requests arriving within one
//! cooldown window of a run's start share that run's result. Nothing is
//! scheduled when the window expires (non-trailing); the next run starts
//! only when a request arrives after expiry. Spawn rate is therefore
//! bounded to one batch per cooldown interval no matter how many clients
//! poll.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::{BoxFuture, Shared};
use futures_util::FutureExt;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::time::Instant;

use vitals_core::{Command, Snapshot};

/// The batch task died before producing a snapshot. Cloneable because every
/// caller sharing the run receives the same error.
#[derive(Debug, Clone, Error)]
#[error("snapshot run failed: {0}")]
pub struct CoalesceError(String);

type SharedRun = Shared<BoxFuture<'static, Result<Arc<Snapshot>, CoalesceError>>>;

/// Explicit coalescer state, transitioned only under the lock.
///
/// `Idle` exists only before the first request. After that the state is
/// always `Running`; whether the window is still open is decided by
/// comparing `started` against the cooldown at request time, and an expired
/// entry is replaced in place by the next request's run.
enum RunState {
    Idle,
    Running { started: Instant, run: SharedRun },
}

/// Shares one in-flight batch execution among concurrent snapshot callers.
pub struct SnapshotCoalescer {
    commands: Arc<[Command]>,
    cooldown: Duration,
    state: Mutex<RunState>,
    runs_started: AtomicU64,
}

impl SnapshotCoalescer {
    pub fn new(commands: Vec<Command>, cooldown: Duration) -> Self {
        Self {
            commands: commands.into(),
            cooldown,
            state: Mutex::new(RunState::Idle),
            runs_started: AtomicU64::new(0),
        }
    }

    /// The latest snapshot: the pending (or just-finished) run's result if
    /// its cooldown window is still open, otherwise a fresh run's.
    ///
    /// A caller may receive a snapshot up to one cooldown interval old.
    /// That staleness bound is the contract, not a defect.
    pub async fn snapshot(&self) -> Result<Arc<Snapshot>, CoalesceError> {
        self.current_run().await
    }

    /// Number of batch passes started since construction.
    pub fn runs_started(&self) -> u64 {
        self.runs_started.load(Ordering::Relaxed)
    }

    /// Pick the run satisfying this request. The lock spans the whole
    /// decide-and-transition step and is never held across an await, so no
    /// caller can observe a half-updated state or a stale run handed out as
    /// fresh.
    fn current_run(&self) -> SharedRun {
        let mut state = self.state.lock();
        if let RunState::Running { started, run } = &*state {
            if started.elapsed() < self.cooldown {
                return run.clone();
            }
        }
        let run = self.start_run();
        *state = RunState::Running { started: Instant::now(), run: run.clone() };
        run
    }

    /// Spawn one batch pass as a detached task. Callers abandoning interest
    /// never cancel it; in-flight child processes always run to exit.
    fn start_run(&self) -> SharedRun {
        self.runs_started.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(commands = self.commands.len(), "starting batch run");
        let commands = Arc::clone(&self.commands);
        let task = tokio::spawn(async move { Arc::new(vitals_runner::run_all(&commands).await) });
        async move { task.await.map_err(|e| CoalesceError(e.to_string())) }
            .boxed()
            .shared()
    }
}

#[cfg(test)]
#[path = "coalesce_tests.rs"]
mod tests;
