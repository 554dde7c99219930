//! Tablature buffer
//!
//! Ordered sequence of tablature lines, one token per line. Lines are only
//! appended at the end or removed from the end; there is no editing in the
//! middle of the buffer.

use serde::{Deserialize, Serialize};

/// Append-only line store for one tablature document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TablatureBuffer {
    lines: Vec<String>,
}

impl TablatureBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a buffer from existing lines
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Create a buffer from saved text, one token per non-blank line
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect();

        Self { lines }
    }

    /// All lines in performance order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Most recently appended line
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|s| s.as_str())
    }

    /// Append one line at the end
    pub fn append_line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Remove the last line, returning it. Empty buffer is left untouched.
    pub fn remove_last_line(&mut self) -> Option<String> {
        self.lines.pop()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Text handed to the save block
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}
