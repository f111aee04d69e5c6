// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `nush` — an interactive POSIX-family command shell (spec.md §1).
//!
//! Argument-free launcher: there is no CLI surface beyond the REPL itself
//! (spec.md's Non-goals never mention flags, so none are invented). `main`
//! owns logging setup, environment loading, history persistence across the
//! session lifetime, and mapping the loop's stop reason to a process exit
//! code.

mod env;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;

use env::Environment;
use nush_shell::ShellState;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("nush: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG`/`NUSH_LOG`-driven `tracing` setup, matching the teacher's
/// `tracing-subscriber` (env-filter) initialization style. Purely
/// diagnostic — never required for correct behavior, never printed to the
/// user's own stdout (spec.md §6).
fn init_tracing() {
    let filter = std::env::var("NUSH_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run() -> anyhow::Result<()> {
    let env = Environment::load();
    let mut startup_state = ShellState::new(env.path.clone(), env.home.clone());

    if let Some(histfile) = &env.histfile {
        startup_state.history.load_startup(histfile).await;
    }
    let state = Arc::new(Mutex::new(startup_state));

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    let reason = repl::run_repl(stdin, stdout, &state).await;

    tracing::debug!(?reason, "shell loop ended");

    // History I/O failure on shutdown is silently ignored (spec.md §7).
    if let Some(histfile) = &env.histfile {
        let _ = state.lock().await.history.append_to_file(histfile).await;
    }

    Ok(())
}
