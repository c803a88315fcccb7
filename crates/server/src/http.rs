// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP status endpoint
//!
//! One route: `GET /data` returns the coalesced snapshot as JSON, one object
//! per configured command in command order. Request parameters never
//! influence the snapshot. Rendering is the polling client's concern.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::coalesce::SnapshotCoalescer;
use vitals_core::Snapshot;

/// Router for the status endpoint.
pub fn router(coalescer: Arc<SnapshotCoalescer>) -> Router {
    Router::new().route("/data", get(data)).with_state(coalescer)
}

async fn data(
    State(coalescer): State<Arc<SnapshotCoalescer>>,
) -> Result<Json<Snapshot>, (StatusCode, String)> {
    match coalescer.snapshot().await {
        Ok(snapshot) => Ok(Json(snapshot.as_ref().clone())),
        Err(error) => {
            tracing::error!(%error, "snapshot request failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, error.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
