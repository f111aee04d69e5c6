// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `cd [TARGET]` (spec.md §4.E) — mutates the process-global working
//! directory. `TARGET` may be absent (use `HOME`), a bare `~`, or a
//! `~/rest` path; anything else is used as-is.

use crate::{DynWriter, ShellState};

pub(super) async fn run(args: &[String], state: &mut ShellState, stdout: &mut Option<DynWriter>) {
    let target = match args.first() {
        None => match state.home.as_deref() {
            Some(home) => home.to_string(),
            None => {
                super::write_out(stdout, "cd: HOME not set\n").await;
                return;
            }
        },
        Some(raw) => match expand_tilde(raw, state.home.as_deref()) {
            Some(expanded) => expanded,
            None => {
                super::write_out(stdout, "cd: HOME not set\n").await;
                return;
            }
        },
    };

    if std::env::set_current_dir(&target).is_err() {
        super::write_out(stdout, &format!("cd: {target}: No such file or directory\n")).await;
    }
}

/// Expand a leading `~` against `home`. `~` alone maps to `home`; `~/rest`
/// maps to `home` joined with `rest`; anything else is returned unchanged.
/// Returns `None` only when the argument actually needs `home` and there
/// isn't one.
fn expand_tilde(raw: &str, home: Option<&str>) -> Option<String> {
    if raw == "~" {
        return home.map(String::from);
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        return home.map(|h| format!("{h}/{rest}"));
    }
    Some(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tilde_expands_to_home() {
        assert_eq!(expand_tilde("~", Some("/home/u")), Some("/home/u".into()));
    }

    #[test]
    fn tilde_slash_joins_remainder() {
        assert_eq!(
            expand_tilde("~/projects", Some("/home/u")),
            Some("/home/u/projects".into())
        );
    }

    #[test]
    fn non_tilde_path_passes_through() {
        assert_eq!(expand_tilde("/tmp", Some("/home/u")), Some("/tmp".into()));
    }

    #[test]
    fn tilde_without_home_is_none() {
        assert_eq!(expand_tilde("~", None), None);
    }
}
