// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vitals-server: Snapshot coalescing and the HTTP status endpoint.

pub mod coalesce;
pub mod config;
pub mod http;

pub use coalesce::{CoalesceError, SnapshotCoalescer};
pub use config::{Config, ConfigError};
pub use http::router;
