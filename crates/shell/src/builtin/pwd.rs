// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pwd` (spec.md §4.E) — emits the current working directory and a
//! trailing newline.

use crate::DynWriter;

pub(super) async fn run(stdout: &mut Option<DynWriter>) {
    let line = match std::env::current_dir() {
        Ok(dir) => format!("{}\n", dir.display()),
        Err(err) => format!("pwd: {err}\n"),
    };
    super::write_out(stdout, &line).await;
}
