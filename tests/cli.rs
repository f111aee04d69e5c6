// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box tests driving the built `nush` binary end to end, the way the
//! teacher's root package drives `oj` with `assert_cmd`.

use assert_cmd::Command;

fn nush(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("nush").unwrap();
    cmd.env("HOME", home);
    cmd.env("HISTFILE", home.join(".nu_history"));
    cmd
}

/// Feed `lines` (each terminated with `\n`) to a fresh `nush` process and
/// return its captured stdout.
fn run_lines(lines: &[&str]) -> String {
    let dir = tempfile::tempdir().unwrap();
    let mut input = lines.join("\n");
    input.push('\n');
    let output = nush(dir.path()).write_stdin(input).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn echo_preserves_embedded_double_spaces() {
    let out = run_lines(&["echo \"hello  world\"", "exit"]);
    assert!(out.contains("hello  world\n"), "got: {out:?}");
}

#[test]
fn echo_collapses_unquoted_whitespace_runs() {
    let out = run_lines(&["echo hello   world", "exit"]);
    assert!(out.contains("hello world\n"), "got: {out:?}");
}

#[test]
fn single_quotes_keep_backslash_n_literal() {
    let out = run_lines(&["echo 'a\\nb'", "exit"]);
    assert!(out.contains("a\\nb\n"), "got: {out:?}");
}

#[test]
fn type_reports_builtin_for_echo() {
    let out = run_lines(&["type echo", "exit"]);
    assert!(out.contains("echo is a shell builtin\n"), "got: {out:?}");
}

#[test]
fn lone_pipe_is_a_syntax_error_and_does_not_crash_the_loop() {
    let out = run_lines(&["|", "echo still-alive", "exit"]);
    assert!(out.contains("syntax error near unexpected token '|'"), "got: {out:?}");
    assert!(out.contains("still-alive\n"), "got: {out:?}");
}

#[test]
fn redirection_writes_to_file_and_a_later_line_reads_it_back() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out.txt");
    let redir_line = format!("echo foo > {}", target.display());
    let cat_line = format!("cat {}", target.display());

    let home = tempfile::tempdir().unwrap();
    let mut input = format!("{redir_line}\n{cat_line}\nexit\n");
    let output = nush(home.path())
        .write_stdin(std::mem::take(&mut input))
        .output()
        .unwrap();
    assert!(output.status.success());

    assert_eq!(std::fs::read_to_string(&target).unwrap(), "foo\n");
    assert!(String::from_utf8(output.stdout).unwrap().contains("foo\n"));
}

#[test]
fn pipeline_of_two_external_commands() {
    let out = run_lines(&["echo hi | tr h H", "exit"]);
    assert!(out.contains("Hi\n"), "got: {out:?}");
}

#[test]
fn eof_without_exit_terminates_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let output = nush(dir.path()).write_stdin("echo done\n").output().unwrap();
    assert!(output.status.success());
}

#[test]
fn history_builtin_lists_entered_commands_with_index() {
    let out = run_lines(&["echo one", "echo two", "history", "exit"]);
    assert!(out.contains("1  echo one"), "got: {out:?}");
    assert!(out.contains("2  echo two"), "got: {out:?}");
}

#[test]
fn history_persists_across_sessions_via_histfile() {
    let home = tempfile::tempdir().unwrap();

    let first = nush(home.path()).write_stdin("echo first-session\nexit\n").output().unwrap();
    assert!(first.status.success());

    let out = run_in_home(home.path(), &["history", "exit"]);
    assert!(out.contains("first-session"), "got: {out:?}");
}

fn run_in_home(home: &std::path::Path, lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    let output = nush(home).write_stdin(input).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}
