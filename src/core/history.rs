//! Undo/redo history of visited states.
//!
//! The history is a linear list of state names plus a cursor. The cursor
//! is advanced by every successful forward move, whether or not that move
//! appended an entry, so it can run ahead of the last index. Stepping back
//! clamps it into range before reading an entry.

use serde::{Deserialize, Serialize};

/// Ordered record of visited states with an undo/redo cursor.
///
/// # Example
///
/// ```rust
/// use waymark::History;
///
/// let mut history = History::new("a");
/// history.push("b");
/// history.push_unique("a");
///
/// assert_eq!(history.entries(), ["a", "b"]);
/// assert_eq!(history.cursor(), 2);
///
/// assert_eq!(history.step_back(), Some("b"));
/// assert_eq!(history.step_back(), Some("a"));
/// assert_eq!(history.step_back(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    /// Create a history seeded with a single entry and the cursor at 0.
    pub fn new(first: impl Into<String>) -> Self {
        Self {
            entries: vec![first.into()],
            cursor: 0,
        }
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Current undo/redo position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently recorded entry.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Check whether `state` appears anywhere in the history.
    pub fn contains(&self, state: &str) -> bool {
        self.entries.iter().any(|entry| entry == state)
    }

    /// Append `state` unconditionally and advance the cursor.
    pub fn push(&mut self, state: impl Into<String>) {
        self.entries.push(state.into());
        self.cursor += 1;
    }

    /// Append `state` only if it is not already recorded; the cursor
    /// advances either way.
    ///
    /// Returns `true` if an entry was appended.
    pub fn push_unique(&mut self, state: &str) -> bool {
        let appended = !self.contains(state);
        if appended {
            self.entries.push(state.to_string());
        }
        self.cursor += 1;
        appended
    }

    pub fn can_step_back(&self) -> bool {
        self.cursor > 0
    }

    /// Move the cursor one step back and return the entry it lands on.
    ///
    /// Returns `None` without moving when the cursor is already at 0.
    pub fn step_back(&mut self) -> Option<&str> {
        if !self.can_step_back() {
            return None;
        }
        let last_index = self.entries.len().saturating_sub(1);
        self.cursor = (self.cursor - 1).min(last_index);
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Check whether a step forward is possible while sitting in `current`.
    ///
    /// Requires an entry after the cursor, and refuses when `current` is
    /// already the newest recorded entry.
    pub fn can_step_forward(&self, current: &str) -> bool {
        self.cursor + 1 < self.entries.len() && self.last() != Some(current)
    }

    /// Move the cursor one step forward and return the entry it lands on.
    ///
    /// Returns `None` without moving when [`can_step_forward`](Self::can_step_forward)
    /// is false.
    pub fn step_forward(&mut self, current: &str) -> Option<&str> {
        if !self.can_step_forward(current) {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Replace the whole history with a single entry and rewind the cursor.
    pub fn reset(&mut self, first: impl Into<String>) {
        self.entries = vec![first.into()];
        self.cursor = 0;
    }
}
