// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw-socket specs for the `/data` endpoint.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use vitals_core::Command;
use vitals_server::{router, SnapshotCoalescer};

fn cmd(tokens: &[&str]) -> Command {
    Command::new(tokens.iter().map(|s| s.to_string()).collect()).unwrap()
}

/// Serve a router on an ephemeral port; returns the address and the shared
/// coalescer so specs can assert how many batch runs were started.
async fn serve(
    commands: Vec<Command>,
    cooldown: Duration,
) -> (std::net::SocketAddr, Arc<SnapshotCoalescer>) {
    let coalescer = Arc::new(SnapshotCoalescer::new(commands, cooldown));
    let app = router(Arc::clone(&coalescer));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (addr, coalescer)
}

async fn get(addr: std::net::SocketAddr, path: &str) -> (String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
    stream
        .write_all(
            format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n").as_bytes(),
        )
        .await
        .unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    let response = String::from_utf8(response).unwrap();
    let (head, body) = response
        .split_once("\r\n\r\n")
        .unwrap_or((response.as_str(), ""));
    (head.to_string(), body.to_string())
}

#[tokio::test]
async fn get_data_returns_json_snapshot() {
    let (addr, _) =
        serve(vec![cmd(&["echo", "a"]), cmd(&["uptime"])], Duration::from_millis(500)).await;
    let (head, body) = get(addr, "/data").await;

    assert!(head.starts_with("HTTP/1.1 200"), "unexpected head: {head}");
    assert!(head.to_ascii_lowercase().contains("content-type: application/json"));

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["cmd"], serde_json::json!(["echo", "a"]));
    assert_eq!(results[0]["lines"][0]["line"], "a");
    assert_eq!(results[1]["cmd"], serde_json::json!(["uptime"]));
}

#[tokio::test]
async fn polling_clients_within_the_window_share_one_run() {
    // A wide window so the whole stampede lands inside it under real time.
    let (addr, coalescer) =
        serve(vec![cmd(&["echo", "shared"])], Duration::from_secs(60)).await;

    for _ in 0..5 {
        let (head, body) = get(addr, "/data").await;
        assert!(head.starts_with("HTTP/1.1 200"));
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json[0]["lines"][0]["line"], "shared");
    }

    assert_eq!(coalescer.runs_started(), 1);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (addr, _) = serve(vec![cmd(&["uptime"])], Duration::from_millis(500)).await;
    let (head, _) = get(addr, "/nope").await;
    assert!(head.starts_with("HTTP/1.1 404"), "unexpected head: {head}");
}
