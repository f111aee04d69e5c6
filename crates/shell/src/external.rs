// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Looks up a name on `PATH` and spawns it as a child process (spec.md
//! §4.F). Stdio wiring per stage role is the caller's job — this module
//! only resolves the executable and configures `argv[0]`.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::error::SpawnError;

/// Search `path_var` (a colon-separated `PATH`-style string) for the first
/// regular file named `name` with any execute bit set. Empty segments are
/// ignored. Shared with the `type` builtin (SPEC_FULL.md §6) — both need
/// "first regular file on PATH with an execute bit".
pub fn search_path(path_var: &str, name: &str) -> Option<PathBuf> {
    for segment in path_var.split(':') {
        if segment.is_empty() {
            continue;
        }
        let candidate = Path::new(segment).join(name);
        if is_executable_file(&candidate) {
            return Some(candidate);
        }
    }
    None
}

fn is_executable_file(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    metadata.is_file() && metadata.permissions().mode() & 0o111 != 0
}

/// Build a [`Command`] for `head` resolved via `path_var`, with `argv[0]`
/// set to the *typed* name rather than the resolved path, and arguments
/// appended in order.
///
/// Returns [`SpawnError::NotFound`] if `head` cannot be located, matching
/// the `NAME: command not found` diagnostic of spec.md §4.F/§7.
pub fn resolve(path_var: &str, head: &str, args: &[String]) -> Result<Command, SpawnError> {
    let resolved = search_path(path_var, head).ok_or_else(|| SpawnError::NotFound {
        name: head.to_string(),
    })?;
    let mut command = Command::new(resolved);
    command.arg0(head);
    command.args(args);
    Ok(command)
}
