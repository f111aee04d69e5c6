// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use nush_core::build_plan;
use tokio::sync::Mutex;

use super::*;

fn state() -> SharedState {
    Arc::new(Mutex::new(ShellState::new(
        std::env::var("PATH").unwrap_or_default(),
        std::env::var("HOME").ok(),
    )))
}

#[tokio::test]
async fn echo_redirected_to_file_writes_exact_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.txt");
    let plan = build_plan(&format!("echo foo > {}", target.display())).unwrap();

    let st = state();
    execute(plan, &st).await;

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "foo\n");
}

#[tokio::test]
async fn append_redirection_does_not_truncate_prior_contents() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.txt");
    std::fs::write(&target, "existing\n").unwrap();

    let plan = build_plan(&format!("echo more >> {}", target.display())).unwrap();
    let st = state();
    execute(plan, &st).await;

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "existing\nmore\n");
}

#[tokio::test]
async fn pipeline_of_external_commands_relays_bytes() {
    let plan = build_plan("printf 'hi\\n' | cat").unwrap();
    let st = state();
    // Nothing to assert on captured stdout here (it goes to the real
    // process stdout), but this exercises relay-task wiring without
    // panicking or hanging.
    execute(plan, &st).await;
}

#[tokio::test]
async fn builtin_piped_into_external_command_is_drained() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.txt");
    let plan = build_plan(&format!("echo hello | cat > {}", target.display())).unwrap();
    let st = state();
    execute(plan, &st).await;

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello\n");
}

#[tokio::test]
async fn command_not_found_does_not_hang_pipeline() {
    let plan = build_plan("definitely-not-a-real-command-xyz | cat").unwrap();
    let st = state();
    execute(plan, &st).await;
}

#[tokio::test]
async fn missing_redirection_target_does_not_hang() {
    let plan = build_plan("echo hi >").unwrap();
    let st = state();
    execute(plan, &st).await;
}
