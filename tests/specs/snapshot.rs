// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot scenarios driven through the public crate APIs.

use std::sync::Arc;

use vitals_core::{Command, StreamTag};
use vitals_runner::run_all;
use vitals_server::{Config, SnapshotCoalescer};

fn cmd(tokens: &[&str]) -> Command {
    Command::new(tokens.iter().map(|s| s.to_string()).collect()).unwrap()
}

fn sh(script: &str) -> Command {
    cmd(&["sh", "-c", script])
}

#[tokio::test]
async fn echo_produces_one_stdout_line() {
    let snapshot = run_all(&[cmd(&["echo", "a"])]).await;

    assert_eq!(snapshot.len(), 1);
    let result = &snapshot[0];
    assert!(result.outcome.is_success());
    assert_eq!(result.lines.len(), 1);
    assert_eq!(result.lines[0].stream, StreamTag::Stdout);
    assert_eq!(result.lines[0].text, "a");
}

#[tokio::test]
async fn stdout_then_stderr_keeps_segment_order() {
    let snapshot =
        run_all(&[sh("printf 'x\\ny\\n'; sleep 0.2; printf 'e\\n' >&2")]).await;

    let tagged: Vec<_> = snapshot[0]
        .lines
        .iter()
        .map(|l| (l.stream, l.text.as_str()))
        .collect();
    assert_eq!(
        tagged,
        vec![
            (StreamTag::Stdout, "x"),
            (StreamTag::Stdout, "y"),
            (StreamTag::Stderr, "e"),
        ]
    );
}

#[tokio::test]
async fn missing_executable_keeps_its_slot_in_position() {
    let commands = vec![
        cmd(&["echo", "before"]),
        cmd(&["vitals-definitely-not-a-command"]),
        cmd(&["echo", "after"]),
    ];
    let snapshot = run_all(&commands).await;

    assert_eq!(snapshot.len(), 3);
    for (i, result) in snapshot.results().iter().enumerate() {
        assert_eq!(result.cmd, commands[i]);
    }
    assert!(snapshot[1].outcome.is_failure());
    assert!(snapshot[0].outcome.is_success());
    assert!(snapshot[2].outcome.is_success());
}

#[tokio::test]
async fn snapshot_serializes_to_the_documented_shape() {
    let snapshot = run_all(&[cmd(&["echo", "a"])]).await;
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(
        json[0]["cmd"],
        serde_json::json!(["echo", "a"]),
    );
    assert_eq!(json[0]["outcome"]["status"], "completed");
    assert_eq!(json[0]["outcome"]["exit_code"], 0);
    assert_eq!(json[0]["lines"][0]["stream"], "stdout");
    assert_eq!(json[0]["lines"][0]["line"], "a");
    assert!(json[0]["lines"][0]["key"].is_string());
}

#[tokio::test]
async fn config_drives_the_coalescer_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitals.toml");
    // A long window so both calls land inside it under real time.
    std::fs::write(
        &path,
        r#"
cooldown_ms = 60000
commands = [
    ["echo", "hello"],
    ["uptime"],
]
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    let coalescer =
        Arc::new(SnapshotCoalescer::new(config.commands.clone(), config.cooldown()));

    let first = coalescer.snapshot().await.unwrap();
    let second = coalescer.snapshot().await.unwrap();

    assert_eq!(coalescer.runs_started(), 1);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].lines[0].text, "hello");
}

#[tokio::test]
async fn unchanged_output_keeps_identical_keys_across_passes() {
    // Two independent passes over the same command: the UI's render
    // identity must not change when content did not.
    let commands = [sh("printf 'one\\ntwo\\n'")];
    let first = run_all(&commands).await;
    let second = run_all(&commands).await;

    let keys = |s: &vitals_core::Snapshot| {
        s[0].lines.iter().map(|l| l.key.clone()).collect::<Vec<_>>()
    };
    assert_eq!(keys(&first), keys(&second));
}
