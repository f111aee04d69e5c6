// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Orchestrates a [`PipelinePlan`]: allocates inter-stage byte channels,
//! wires each stage's stdio per its role (spec.md §4.G), and waits for
//! every stage — builtin or external — to reach a terminal state before
//! returning.
//!
//! Every adjacent pair of stages is bridged by a `tokio::io::duplex` pair,
//! uniformly for builtin and external neighbors alike (spec.md §9 "Stream
//! plumbing": "a passthrough in-memory stream suffices"). External stages
//! relay their OS pipe into/out of that channel with `tokio::io::copy`
//! tasks, mirroring the teacher's `execute_job` relay-task pattern
//! (`exec/run.rs`) generalized to heterogeneous stages.

use std::process::Stdio as StdStdio;

use futures_util::future::join_all;
use nush_core::{CommandPlan, Fd, PipelinePlan};
use tokio::io::{duplex, AsyncWriteExt};
use tokio::process::Child;

use crate::builtin::{self, BuiltinCtx};
use crate::dispatch::{self, Route};
use crate::fileio;
use crate::{external, DynReader, DynWriter, SharedState};
#[cfg(test)]
use crate::ShellState;

/// The channel capacity between adjacent stages; bytes above this block the
/// writing side until the reader drains it, same flow-control behavior as
/// an OS pipe.
const CHANNEL_CAPACITY: usize = 64 * 1024;

/// Returned once every stage of a pipeline has signalled termination.
/// Currently carries no data — its existence is the signal — but is kept
/// as a named type rather than `()` so the executor's contract ("fires
/// exactly once, after every stage terminates") has a place to grow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorOutcome;

/// Execute `plan` to completion.
///
/// Every stage runs as its own tokio task so that, e.g., a builtin stage
/// blocked draining a slow upstream doesn't stall an unrelated external
/// stage elsewhere in the pipeline (spec.md §9 "Concurrency model": "stages
/// proceed in parallel once wired"). `state` is shared because more than
/// one task may hold it live at once: builtins hold the lock for their
/// whole run; external stages only take it briefly, to clone `path` ahead
/// of resolving the command on it.
/// Diagnostics (command-not-found, spawn failure, `cd` errors, ...) are
/// written directly to the real process stdout as they occur, matching
/// spec.md §6 ("Diagnostics are written to standard output").
pub async fn execute(plan: PipelinePlan, state: &SharedState) -> ExecutorOutcome {
    let n = plan.len();
    if n == 0 {
        return ExecutorOutcome;
    }

    // One duplex pair per adjacent boundary: channel[i] connects stage i's
    // output to stage i+1's input.
    let mut readers: Vec<Option<DynReader>> = Vec::with_capacity(n);
    let mut writers: Vec<Option<DynWriter>> = Vec::with_capacity(n.saturating_sub(1));
    readers.push(None); // stage 0 has no upstream channel
    for _ in 0..n.saturating_sub(1) {
        let (read_half, write_half) = duplex(CHANNEL_CAPACITY);
        readers.push(Some(Box::new(read_half) as DynReader));
        writers.push(Some(Box::new(write_half) as DynWriter));
    }
    writers.push(None); // stage n-1 has no downstream channel

    let mut handles = Vec::with_capacity(n);
    for (i, (command, (stdin, stdout))) in plan
        .into_iter()
        .zip(readers.into_iter().zip(writers.into_iter()))
        .enumerate()
    {
        let role = StageRole::classify(i, n);
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            run_stage(command, role, stdin, stdout, state).await;
        }));
    }

    let _ = join_all(handles).await;
    ExecutorOutcome
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum StageRole {
    Only,
    First,
    Middle,
    Last,
}

impl StageRole {
    fn classify(i: usize, n: usize) -> Self {
        match (i, n) {
            (_, 1) => Self::Only,
            (0, _) => Self::First,
            (i, n) if i == n - 1 => Self::Last,
            _ => Self::Middle,
        }
    }

    fn has_upstream_channel(self) -> bool {
        matches!(self, Self::Middle | Self::Last)
    }

    fn has_downstream_channel(self) -> bool {
        matches!(self, Self::First | Self::Middle)
    }
}

/// Run a single stage to its terminal signal. `stdin`/`stdout` are the
/// duplex halves wired to neighbors (`None` at the pipeline's open ends).
async fn run_stage(
    command: CommandPlan,
    role: StageRole,
    stdin: Option<DynReader>,
    stdout: Option<DynWriter>,
    state: SharedState,
) {
    match dispatch::route(&command.head) {
        Route::Internal(builtin) => {
            run_internal_stage(builtin, command, stdin, stdout, state).await
        }
        Route::External => run_external_stage(command, role, stdin, stdout, state).await,
    }
}

/// `stdin`/`stdout` already reflect this stage's role by construction: the
/// executor only hands a `Some` channel end where the stage table says
/// one exists. The state lock is held for the builtin's full run — two
/// builtins in the same pipeline (e.g. `cd /tmp | history`) simply
/// serialize against each other rather than racing.
async fn run_internal_stage(
    builtin: dispatch::Builtin,
    command: CommandPlan,
    stdin: Option<DynReader>,
    stdout: Option<DynWriter>,
    state: SharedState,
) {
    // A builtin has exactly one output concept ("stdout"); spec.md §4.G's
    // "the inter-stage channel carries whichever of stdout/stderr is not
    // diverted" has no stderr source to fall back to for a builtin, so a
    // redirection targeting fd 1 simply replaces the channel/stdout
    // destination with the file, and a redirection targeting fd 2 has no
    // plumbing effect beyond creating the target file (there is nothing a
    // builtin ever writes to an fd-2 stream).
    let stdout = match &command.redirection {
        Some(clause) if clause.fd == Fd::Stdout => match fileio::open_target(clause) {
            Ok(file) => Some(Box::new(tokio::fs::File::from_std(file)) as DynWriter),
            // No target, or the target can't be opened: an executor-level
            // I/O failure (spec.md §7) — the stage's output goes nowhere,
            // it does NOT fall back to the shell's real stdout.
            Err(_) => Some(Box::new(tokio::io::sink()) as DynWriter),
        },
        Some(clause) => {
            // fd 2 redirection: touch the file for side-effect parity with
            // external stages, plumbing is unaffected.
            let _ = fileio::open_target(clause);
            stdout
        }
        None => stdout,
    };

    let mut guard = state.lock().await;
    let ctx = BuiltinCtx {
        stdin,
        stdout,
        state: &mut guard,
    };
    builtin::run(builtin, &command.args, ctx).await;
}

async fn run_external_stage(
    command: CommandPlan,
    role: StageRole,
    mut stdin: Option<DynReader>,
    mut stdout: Option<DynWriter>,
    state: SharedState,
) {
    // Tracing span, mirroring the teacher's `exec/run.rs` "shell.cmd" span:
    // fields are recorded once the child has actually exited rather than
    // entered across the awaits below.
    let cmd_span = tracing::info_span!(
        "shell.cmd",
        cmd = %command.head,
        args = ?command.args,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );
    let start = std::time::Instant::now();

    let path_var = state.lock().await.path.clone();
    let mut process = match external::resolve(&path_var, &command.head, &command.args) {
        Ok(process) => process,
        Err(err) => {
            tracing::warn!(parent: &cmd_span, cmd = %command.head, "command not found");
            print_stdout(&format!("{err}\n")).await;
            return;
        }
    };

    // Which descriptor (if any) feeds the downstream channel, and which
    // descriptor (if any) is diverted to a file.
    let diverted_fd = command.redirection.as_ref().map(|c| c.fd);
    let channel_fd = if role.has_downstream_channel() {
        Some(if diverted_fd == Some(Fd::Stdout) {
            Fd::Stderr
        } else {
            Fd::Stdout
        })
    } else {
        None
    };

    process.stdin(if role.has_upstream_channel() {
        StdStdio::piped()
    } else {
        StdStdio::inherit()
    });
    process.stdout(stdio_for(Fd::Stdout, diverted_fd, channel_fd, &command));
    process.stderr(stdio_for(Fd::Stderr, diverted_fd, channel_fd, &command));

    let mut child: Child = match process.spawn() {
        Ok(child) => child,
        Err(err) => {
            tracing::warn!(parent: &cmd_span, cmd = %command.head, error = %err, "spawn failed");
            print_stdout(&format!("Error: {err}\n")).await;
            return;
        }
    };

    let mut relays = Vec::new();

    if role.has_upstream_channel() {
        if let (Some(mut upstream), Some(mut child_stdin)) = (stdin.take(), child.stdin.take()) {
            relays.push(tokio::spawn(async move {
                let _ = tokio::io::copy(&mut upstream, &mut child_stdin).await;
            }));
        }
    }

    if let Some(fd) = channel_fd {
        let source = match fd {
            Fd::Stdout => child.stdout.take().map(|r| Box::new(r) as DynReader),
            Fd::Stderr => child.stderr.take().map(|r| Box::new(r) as DynReader),
        };
        if let (Some(mut source), Some(mut downstream)) = (source, stdout.take()) {
            relays.push(tokio::spawn(async move {
                let _ = tokio::io::copy(&mut source, &mut downstream).await;
                let _ = downstream.shutdown().await;
            }));
        }
    }

    let status = child.wait().await;
    for relay in relays {
        let _ = relay.await;
    }

    let duration = start.elapsed();
    let exit_code = status.ok().and_then(|s| s.code()).unwrap_or(-1);
    cmd_span.record("exit_code", exit_code);
    cmd_span.record("duration_ms", duration.as_millis() as u64);
}

/// Build the `Stdio` for one of a stage's output descriptors (`fd`),
/// honoring a redirection clause targeting it, otherwise piping it if it
/// is the descriptor feeding the downstream channel, otherwise inheriting
/// the shell's own stream.
fn stdio_for(
    fd: Fd,
    diverted_fd: Option<Fd>,
    channel_fd: Option<Fd>,
    command: &CommandPlan,
) -> StdStdio {
    if diverted_fd == Some(fd) {
        if let Some(clause) = &command.redirection {
            if let Ok(stdio) = fileio::open_target_stdio(clause) {
                return stdio;
            }
        }
        // Ill-formed clause (no target) or an unopenable target: spec.md
        // §7 treats this as an executor-level I/O failure — the stage's
        // write end for that descriptor goes nowhere.
        return StdStdio::null();
    }
    if channel_fd == Some(fd) {
        return StdStdio::piped();
    }
    StdStdio::inherit()
}

/// Write a diagnostic line to the shell's real stdout (not the pipeline's
/// inter-stage channel), even when this stage is itself mid-pipeline —
/// matches spec.md §6's "diagnostics are written to standard output".
async fn print_stdout(line: &str) {
    let _ = tokio::io::stdout().write_all(line.as_bytes()).await;
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
