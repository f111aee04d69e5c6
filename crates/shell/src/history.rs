// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The history collaborator: in-memory entries plus the "last-saved marker"
//! (spec.md §3, §4.E, GLOSSARY). The only piece of core state that outlives
//! a single input line.

use std::path::Path;

use tokio::io::AsyncWriteExt;

/// In-memory command history for one session.
///
/// `last_saved` is the number of leading entries already persisted by a
/// prior `-w`/`-a`; `-a` only ever writes the entries after that mark.
pub struct History {
    entries: Vec<String>,
    last_saved: usize,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_saved: 0,
        }
    }

    /// Record one input line. Called before execution begins (spec.md §5),
    /// so `history` run on the same line observes its own invocation.
    pub fn add(&mut self, line: String) {
        self.entries.push(line);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All entries paired with their 1-based index, oldest first.
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (i + 1, e.as_str()))
    }

    /// The last `n` entries, indices preserved.
    pub fn last_n(&self, n: usize) -> impl Iterator<Item = (usize, &str)> {
        let start = self.entries.len().saturating_sub(n);
        self.entries[start..]
            .iter()
            .enumerate()
            .map(move |(i, e)| (start + i + 1, e.as_str()))
    }

    /// Replace in-memory history with the lines of `path` and reset the
    /// last-saved marker (spec.md §4.E `-r`). Blank lines are discarded.
    pub async fn replace_from_file(&mut self, path: &Path) -> std::io::Result<()> {
        let content = tokio::fs::read_to_string(path).await?;
        self.entries = content
            .lines()
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        self.last_saved = 0;
        Ok(())
    }

    /// Load startup history the same way `-r` does, but tolerate a missing
    /// or unreadable file by starting empty (SPEC_FULL.md §6).
    pub async fn load_startup(&mut self, path: &Path) {
        let _ = self.replace_from_file(path).await;
    }

    /// Overwrite `path` with the full history, advancing the marker to the
    /// current length (spec.md §4.E `-w`).
    pub async fn write_to_file(&mut self, path: &Path) -> std::io::Result<()> {
        let mut content = self.entries.join("\n");
        if !self.entries.is_empty() {
            content.push('\n');
        }
        tokio::fs::write(path, content).await?;
        self.last_saved = self.entries.len();
        Ok(())
    }

    /// Append entries after the marker to `path`, advancing it. A no-op
    /// when no new entries exist (spec.md §4.E `-a`, §8 invariant 5).
    pub async fn append_to_file(&mut self, path: &Path) -> std::io::Result<()> {
        if self.last_saved >= self.entries.len() {
            return Ok(());
        }
        let mut content = String::new();
        for entry in &self.entries[self.last_saved..] {
            content.push_str(entry);
            content.push('\n');
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(content.as_bytes()).await?;
        self.last_saved = self.entries.len();
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
