// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command dispatch, the internal command set, the external-process runner,
//! and the pipeline executor that wires them together. Consumes the
//! [`nush_core::PipelinePlan`] produced by `nush-core`.

pub mod builtin;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod external;
pub mod fileio;
pub mod history;

pub use executor::{execute, ExecutorOutcome};
pub use history::History;

use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::Mutex;

/// A type-erased async reader used for the "intermediate byte channel"
/// between pipeline stages (spec.md §4.G, §9).
pub type DynReader = Box<dyn AsyncRead + Unpin + Send>;

/// A type-erased async writer, the dual of [`DynReader`].
pub type DynWriter = Box<dyn AsyncWrite + Unpin + Send>;

/// A [`ShellState`] shared across the concurrently-running stages of one
/// pipeline. Every stage of a pipeline runs as its own tokio task (spec.md
/// §9 "Concurrency model"), so a builtin stage reaching `cd`/`history` needs
/// a handle that is both `Send` and safe to touch from more than one task;
/// a plain `&mut ShellState` cannot be captured by more than one task at a
/// time. Builtins hold the lock for their whole run; external stages only
/// take it briefly, to clone `path` before spawning.
pub type SharedState = Arc<Mutex<ShellState>>;

/// Shared, session-lifetime shell state handed to internal commands.
///
/// The only long-lived core state (spec.md §3 "Lifecycle"); everything else
/// (tokens, stages, plans, child processes) lives for one input line.
/// `path`/`home` are snapshotted once at startup by `nush-cli`'s
/// `Environment` (spec.md §6: `PATH`, `HOME` are read as opaque strings,
/// never mutated by this shell — there is no `export`/assignment support).
pub struct ShellState {
    pub history: History,
    pub path: String,
    pub home: Option<String>,
}

impl ShellState {
    pub fn new(path: String, home: Option<String>) -> Self {
        Self {
            history: History::new(),
            path,
            home,
        }
    }
}
