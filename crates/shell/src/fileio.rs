// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Opens a stage's redirection target, matching spec.md §4.C/§4.F.

use std::fs::{File, OpenOptions};
use std::process::Stdio;

use nush_core::{RedirectMode, RedirectionClause};

use crate::error::RedirectError;

/// Open the file a redirection clause names, honoring overwrite/append mode.
///
/// A clause with a null target (the operator was the last token on the
/// line) is always an error — there is no file to open.
pub fn open_target(clause: &RedirectionClause) -> Result<File, RedirectError> {
    let path = clause.target.as_deref().ok_or(RedirectError::NoTarget)?;
    OpenOptions::new()
        .write(true)
        .create(true)
        .append(clause.mode == RedirectMode::Append)
        .truncate(clause.mode == RedirectMode::Overwrite)
        .open(path)
        .map_err(|source| RedirectError::Open {
            path: path.to_string(),
            source,
        })
}

/// Same as [`open_target`], wrapped as a [`Stdio`] ready to hand to a child.
pub fn open_target_stdio(clause: &RedirectionClause) -> Result<Stdio, RedirectError> {
    open_target(clause).map(Stdio::from)
}
