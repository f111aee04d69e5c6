// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI binary (spec.md §6).

use std::path::PathBuf;

/// The three environment variables the shell consumes, read once at
/// startup. `PATH` and `HOME` are treated as opaque strings by the rest of
/// the crate (nush-core never touches the filesystem; nush-shell's
/// `ShellState` just carries them forward for `cd`/`type`).
pub struct Environment {
    /// Colon-separated external-command search path. Empty when `PATH`
    /// isn't set — the external runner then finds nothing, same as any
    /// other empty-segment-only `PATH`.
    pub path: String,
    /// Required by `cd` with no argument and by `~` expansion; `None` when
    /// unset, surfaced by `cd` as `cd: HOME not set`.
    pub home: Option<String>,
    /// History file path: `HISTFILE` if set, else `$HOME/.nu_history`, else
    /// `None` when neither is available (history simply isn't persisted
    /// across sessions in that case).
    pub histfile: Option<PathBuf>,
}

impl Environment {
    pub fn load() -> Self {
        let path = std::env::var("PATH").unwrap_or_default();
        let home = std::env::var("HOME").ok();
        let histfile = std::env::var("HISTFILE")
            .ok()
            .map(PathBuf::from)
            .or_else(|| home.as_ref().map(|h| PathBuf::from(h).join(".nu_history")));
        Self {
            path,
            home,
            histfile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histfile_defaults_to_home_dot_nu_history() {
        // SAFETY: this test mutates process env vars it restores itself,
        // and the shell test suite serializes anything that touches
        // process-global state (see `serial_test` usage elsewhere); this
        // module has no other tests racing it.
        let prior_histfile = std::env::var("HISTFILE").ok();
        let prior_home = std::env::var("HOME").ok();
        std::env::remove_var("HISTFILE");
        std::env::set_var("HOME", "/home/nush");

        let env = Environment::load();
        assert_eq!(env.histfile, Some(PathBuf::from("/home/nush/.nu_history")));

        match prior_histfile {
            Some(v) => std::env::set_var("HISTFILE", v),
            None => std::env::remove_var("HISTFILE"),
        }
        match prior_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }
    }
}
