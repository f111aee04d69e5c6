// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `history [N | -r F | -w F | -a F]` (spec.md §4.E).

use std::path::Path;

use crate::{DynWriter, ShellState};

pub(super) async fn run(args: &[String], state: &mut ShellState, stdout: &mut Option<DynWriter>) {
    match args.first().map(String::as_str) {
        None => print_all(&state.history, stdout).await,
        Some(flag @ ("-r" | "-w" | "-a")) => {
            let Some(path) = args.get(1) else {
                super::write_out(stdout, &format!("history: {flag}: option requires an argument\n"))
                    .await;
                return;
            };
            run_flag(flag, Path::new(path), state, stdout).await;
        }
        Some(n) => match n.parse::<usize>() {
            Ok(count) => print_last_n(&state.history, count, stdout).await,
            Err(_) => print_all(&state.history, stdout).await,
        },
    }
}

async fn print_all(history: &crate::History, stdout: &mut Option<DynWriter>) {
    let mut out = String::new();
    for (index, entry) in history.indexed() {
        out.push_str(&format!("    {index}  {entry}\n"));
    }
    super::write_out(stdout, &out).await;
}

async fn print_last_n(history: &crate::History, n: usize, stdout: &mut Option<DynWriter>) {
    let mut out = String::new();
    for (index, entry) in history.last_n(n) {
        out.push_str(&format!("    {index}  {entry}\n"));
    }
    super::write_out(stdout, &out).await;
}

async fn run_flag(flag: &str, path: &Path, state: &mut ShellState, stdout: &mut Option<DynWriter>) {
    match flag {
        "-r" => {
            if state.history.replace_from_file(path).await.is_err() {
                super::write_out(
                    stdout,
                    &format!("history: {}: No such file or directory\n", path.display()),
                )
                .await;
            }
        }
        "-w" => {
            if state.history.write_to_file(path).await.is_err() {
                super::write_out(
                    stdout,
                    &format!("history: {}: cannot write to file\n", path.display()),
                )
                .await;
            }
        }
        "-a" => {
            if state.history.append_to_file(path).await.is_err() {
                super::write_out(
                    stdout,
                    &format!("history: {}: cannot write to file\n", path.display()),
                )
                .await;
            }
        }
        _ => unreachable!("caller only dispatches -r/-w/-a"),
    }
}
