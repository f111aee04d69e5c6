// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The read–evaluate–print loop (spec.md §6 "REPL surface").
//!
//! Parsing and execution are delegated to `nush-core`/`nush-shell`; this
//! module only owns the loop shape: print the prompt, read a line, decide
//! whether it's EOF/`exit`/blank/a real command, and reprompt.

use nush_core::build_plan;
use nush_shell::{execute, SharedState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Literal two-character prompt (spec.md §6).
pub const PROMPT: &str = "$ ";

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Standard input reached end-of-file.
    Eof,
    /// The user typed the literal line `exit`.
    ExitCommand,
}

/// Drive the loop until end-of-input or `exit`.
///
/// `input` is the line source (real stdin in production, a `Cursor` in
/// tests); `out` receives the prompt and any parse/diagnostic lines that
/// are not themselves a command's own output (command output is written
/// directly to the real process stdout by the executor — see
/// `nush_shell::executor`).
pub async fn run_repl<R, W>(mut input: R, mut out: W, state: &SharedState) -> StopReason
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    loop {
        let _ = out.write_all(PROMPT.as_bytes()).await;
        let _ = out.flush().await;

        line.clear();
        let bytes_read = match input.read_line(&mut line).await {
            Ok(n) => n,
            Err(_) => 0,
        };
        if bytes_read == 0 {
            return StopReason::Eof;
        }

        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed == "exit" {
            return StopReason::ExitCommand;
        }
        if trimmed.trim().is_empty() {
            continue;
        }

        // History is appended before execution begins, so `history` run on
        // this same line observes its own invocation (spec.md §5).
        state.lock().await.history.add(trimmed.to_string());

        match build_plan(trimmed) {
            Ok(plan) => {
                execute(plan, state).await;
            }
            Err(err) => {
                let _ = out.write_all(format!("{err}\n").as_bytes()).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nush_shell::ShellState;
    use std::io::Cursor;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn state() -> SharedState {
        Arc::new(Mutex::new(ShellState::new(String::new(), None)))
    }

    #[tokio::test]
    async fn eof_on_empty_input_stops_immediately() {
        let input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let reason = run_repl(input, &mut out, &state()).await;
        assert_eq!(reason, StopReason::Eof);
        assert_eq!(out, PROMPT.as_bytes());
    }

    #[tokio::test]
    async fn literal_exit_line_stops_the_loop() {
        let input = Cursor::new(b"exit\n".to_vec());
        let mut out = Vec::new();
        let reason = run_repl(input, &mut out, &state()).await;
        assert_eq!(reason, StopReason::ExitCommand);
    }

    #[tokio::test]
    async fn blank_lines_are_skipped_without_affecting_history() {
        let input = Cursor::new(b"   \n\t\n\n".to_vec());
        let mut out = Vec::new();
        let st = state();
        let reason = run_repl(input, &mut out, &st).await;
        assert_eq!(reason, StopReason::Eof);
        assert_eq!(st.lock().await.history.len(), 0);
    }

    #[tokio::test]
    async fn syntax_error_is_written_to_out_and_loop_continues() {
        let input = Cursor::new(b"|\nexit\n".to_vec());
        let mut out = Vec::new();
        let reason = run_repl(input, &mut out, &state()).await;
        assert_eq!(reason, StopReason::ExitCommand);
        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("syntax error near unexpected token '|'"));
    }

    #[tokio::test]
    async fn a_real_line_is_recorded_in_history_before_execution() {
        let input = Cursor::new(b"echo hi\nexit\n".to_vec());
        let mut out = Vec::new();
        let st = state();
        run_repl(input, &mut out, &st).await;
        assert_eq!(
            st.lock().await.history.indexed().next(),
            Some((1, "echo hi"))
        );
    }
}
