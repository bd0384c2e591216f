//! Linear undo/redo history.
//!
//! Writing a value while somewhere in the middle of the history discards
//! everything after the cursor. Undo and redo at either end are silent
//! no-ops.

pub mod error;

pub use error::HistoryError;

use crate::index::SafeIndex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Value with a linear undo/redo history.
///
/// Invariant: `entries` is never empty and `cursor < entries.len()`.
///
/// Not synchronized: sharing one history across threads is the caller's
/// responsibility.
///
/// # Example
///
/// ```rust
/// use nonstandard::UndoRedo;
///
/// let mut text = UndoRedo::new("a");
/// text.set("ab");
/// text.set("abc");
///
/// text.undo();
/// assert_eq!(*text.value(), "ab");
/// assert_eq!(text.redo_stack(), &["abc"]);
///
/// text.set("abd");
/// assert!(text.redo_stack().is_empty());
/// assert_eq!(text.undo_stack(), &["a", "ab"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "HistorySnapshot<V>",
    into = "HistorySnapshot<V>",
    bound(serialize = "V: Serialize + Clone", deserialize = "V: Deserialize<'de>")
)]
pub struct UndoRedo<V> {
    entries: Vec<V>,
    cursor: usize,
}

/// Wire form of an [`UndoRedo`], validated on the way back in.
#[derive(Serialize, Deserialize)]
struct HistorySnapshot<V> {
    entries: Vec<V>,
    cursor: usize,
}

impl<V> UndoRedo<V> {
    /// Seed a history with a single value.
    pub fn new(initial: V) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Rebuild a history from its entries and cursor.
    pub fn from_parts(entries: Vec<V>, cursor: usize) -> Result<Self, HistoryError> {
        if entries.is_empty() {
            return Err(HistoryError::EmptyHistory);
        }
        if cursor >= entries.len() {
            return Err(HistoryError::CursorOutOfBounds {
                cursor,
                len: entries.len(),
            });
        }
        Ok(Self { entries, cursor })
    }

    /// Value at the cursor.
    pub fn value(&self) -> &V {
        &self.entries[self.cursor]
    }

    /// Record a new value, discarding any redo history.
    pub fn set(&mut self, value: V) {
        let discarded = self.entries.len() - self.cursor - 1;
        self.entries.truncate(self.cursor + 1);
        self.entries.push(value);
        self.cursor += 1;
        trace!(cursor = self.cursor, discarded, "history_write");
    }

    /// Step back one entry. No-op at the oldest entry.
    pub fn undo(&mut self) {
        match self.neighbour(<[V] as SafeIndex>::safe_index_before) {
            Some(index) => self.cursor = index,
            None => debug!(cursor = self.cursor, "undo_at_oldest_entry"),
        }
    }

    /// Step forward one entry. No-op at the newest entry.
    pub fn redo(&mut self) {
        match self.neighbour(<[V] as SafeIndex>::safe_index_after) {
            Some(index) => self.cursor = index,
            None => debug!(cursor = self.cursor, "redo_at_newest_entry"),
        }
    }

    /// Entries before the cursor, oldest first.
    pub fn undo_stack(&self) -> &[V] {
        &self.entries[..self.cursor]
    }

    /// Entries after the cursor, oldest first.
    pub fn redo_stack(&self) -> &[V] {
        &self.entries[self.cursor + 1..]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Every entry, oldest first.
    pub fn entries(&self) -> &[V] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn neighbour(&self, lookup: fn(&[V], isize) -> Option<usize>) -> Option<usize> {
        let position = isize::try_from(self.cursor).ok()?;
        lookup(&self.entries, position)
    }
}

impl<V> TryFrom<HistorySnapshot<V>> for UndoRedo<V> {
    type Error = HistoryError;

    fn try_from(snapshot: HistorySnapshot<V>) -> Result<Self, Self::Error> {
        Self::from_parts(snapshot.entries, snapshot.cursor)
    }
}

impl<V> From<UndoRedo<V>> for HistorySnapshot<V> {
    fn from(history: UndoRedo<V>) -> Self {
        Self {
            entries: history.entries,
            cursor: history.cursor,
        }
    }
}
