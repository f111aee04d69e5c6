// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `type NAME` (spec.md §4.E) — reports whether `NAME` is a shell builtin
//! or resolves it on `PATH`, reusing the external runner's lookup
//! (SPEC_FULL.md §6) rather than duplicating the search.

use crate::{dispatch, external, DynWriter, ShellState};

pub(super) async fn run(args: &[String], state: &ShellState, stdout: &mut Option<DynWriter>) {
    let Some(name) = args.first() else {
        super::write_out(stdout, "type: missing argument\n").await;
        return;
    };

    let line = if dispatch::is_builtin(name) {
        format!("{name} is a shell builtin\n")
    } else {
        match external::search_path(&state.path, name) {
            Some(path) => format!("{name} is {}\n", path.display()),
            None => format!("{name}: not found\n"),
        }
    };
    super::write_out(stdout, &line).await;
}
