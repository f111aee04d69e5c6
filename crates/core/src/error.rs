// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parse-level errors. Tokenizing never fails (§4.A is total); only the
//! pipeline splitter can reject an input line.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A `|` appeared where it would yield an empty stage: at the start, at
    /// the end, or doubled. Rendered verbatim as the shell's diagnostic line.
    #[error("syntax error near unexpected token '|'")]
    EmptyStage,
}
