// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The internal command set (spec.md §4.E): one module per builtin, each
//! exposing an async `run` with the uniform signature the pipeline executor
//! drives every stage through — an argument list, an optional input byte
//! stream, an optional output byte stream, and a handle to the shared
//! [`ShellState`].
//!
//! Output policy: when the output stream is `Some`, write the command's
//! payload there and close it; when `None`, write to the process's real
//! stdout. When the input stream is `Some` it must be drained to
//! completion even if the command never looks at it, so the upstream stage
//! can finish flushing and close its end (spec.md §9 "Drain obligation").

mod cd;
mod echo;
mod history;
mod pwd;
mod type_cmd;

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::dispatch::Builtin;
use crate::{DynReader, DynWriter, ShellState};

/// Everything a builtin needs besides its own argument list.
pub struct BuiltinCtx<'a> {
    pub stdin: Option<DynReader>,
    pub stdout: Option<DynWriter>,
    pub state: &'a mut ShellState,
}

/// Run one internal command to completion.
///
/// `exit` is a member of the catalog (so `type exit` still reports it as a
/// shell builtin) but never actually executes here — it is intercepted by
/// the REPL before a plan reaches the dispatcher (spec.md §4.D). Reaching
/// it here only happens via a pipeline stage naming it explicitly, which
/// spec.md leaves undefined; we treat it as a silent no-op rather than
/// terminating the whole process out from under sibling stages.
pub async fn run(builtin: Builtin, args: &[String], ctx: BuiltinCtx<'_>) {
    let BuiltinCtx {
        mut stdin,
        mut stdout,
        state,
    } = ctx;

    drain(&mut stdin).await;

    match builtin {
        Builtin::Echo => echo::run(args, &mut stdout).await,
        Builtin::Pwd => pwd::run(&mut stdout).await,
        Builtin::Cd => cd::run(args, state, &mut stdout).await,
        Builtin::Type => type_cmd::run(args, state, &mut stdout).await,
        Builtin::History => history::run(args, state, &mut stdout).await,
        Builtin::Exit => {}
    }

    close(stdout).await;
}

/// Drain an input stream to EOF, discarding its bytes. None of the
/// builtins read their input, but an upstream stage's writer half cannot
/// finish flushing until something reads the other end.
async fn drain(stdin: &mut Option<DynReader>) {
    if let Some(reader) = stdin {
        let mut sink = Vec::new();
        let _ = reader.read_to_end(&mut sink).await;
    }
}

/// Write `text` to the stage's output stream if it has one, else to the
/// process's real stdout.
async fn write_out(stdout: &mut Option<DynWriter>, text: &str) {
    match stdout {
        Some(writer) => {
            let _ = writer.write_all(text.as_bytes()).await;
        }
        None => {
            let _ = tokio::io::stdout().write_all(text.as_bytes()).await;
        }
    }
}

/// Close the output stream (shuts down the write half so a downstream
/// reader observes EOF); a no-op when writing straight to stdout.
async fn close(stdout: Option<DynWriter>) {
    if let Some(mut writer) = stdout {
        let _ = writer.shutdown().await;
    }
}
