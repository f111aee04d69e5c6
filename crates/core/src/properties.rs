// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for the quantified invariants of spec.md §8.

use proptest::prelude::*;

use crate::{lexer, pipeline};

/// Strategy for words that contain no whitespace, quote, or backslash
/// characters — safe to round-trip through `join(" ")` and back.
fn plain_word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./-]{1,12}".prop_map(String::from)
}

fn plain_word_list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(plain_word_strategy(), 1..8)
}

proptest! {
    /// Invariant 1: tokens never contain an unescaped quote character or a
    /// raw tab — quote characters are syntactic, never payload, and a tab is
    /// always a separator, never accumulated into a word.
    #[test]
    fn tokens_never_retain_a_tab(input in "[ -~\t]{0,40}") {
        for token in lexer::tokenize(&input) {
            prop_assert!(!token.contains('\t'));
        }
    }

    /// Invariant 2: splitting a token list that contains no `|` yields
    /// exactly one stage equal to the input.
    #[test]
    fn no_pipe_yields_single_stage(words in plain_word_list_strategy()) {
        let stages = pipeline::split(words.clone()).unwrap();
        prop_assert_eq!(stages, vec![words]);
    }

    /// Round-trip: tokenizing the space-join of a plain word list recovers
    /// the original words, since none of them contain whitespace or quoting
    /// metacharacters.
    #[test]
    fn tokenize_join_round_trips(words in plain_word_list_strategy()) {
        let joined = words.join(" ");
        prop_assert_eq!(lexer::tokenize(&joined), words);
    }
}
