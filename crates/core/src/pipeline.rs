// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Splits a token stream on the literal token `|` into an ordered list of
//! stages, rejecting placements that would yield an empty stage.

use crate::{ParseError, Stage};

/// Split `tokens` into pipeline stages.
///
/// A leading, trailing, or doubled `|` yields [`ParseError::EmptyStage`]; the
/// caller renders this as a single diagnostic line and discards the input
/// line rather than executing anything.
pub fn split(tokens: Vec<String>) -> Result<Vec<Stage>, ParseError> {
    let mut stages = Vec::new();
    let mut current = Stage::new();
    let mut saw_pipe = false;

    for token in tokens {
        if token == "|" {
            saw_pipe = true;
            if current.is_empty() {
                return Err(ParseError::EmptyStage);
            }
            stages.push(std::mem::take(&mut current));
        } else {
            current.push(token);
        }
    }

    if current.is_empty() {
        if saw_pipe {
            return Err(ParseError::EmptyStage);
        }
    } else {
        stages.push(current);
    }

    Ok(stages)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
