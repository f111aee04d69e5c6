// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution-layer error types. None of these are fatal to the REPL
//! (spec.md §7) — callers render them as a single diagnostic line and the
//! stage still counts as terminated.

use thiserror::Error;

/// A redirection clause that could not be turned into an open file.
#[derive(Debug, Error)]
pub enum RedirectError {
    /// The operator had no following token (spec.md §4.C: "ill-formed").
    #[error("no target file for redirection")]
    NoTarget,

    #[error("cannot open '{path}'")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// An external command that could not be located or spawned.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("{name}: command not found")]
    NotFound { name: String },

    #[error("{source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
}
