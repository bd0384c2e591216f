//! History snapshot errors.

use thiserror::Error;

/// Errors raised when rebuilding an [`UndoRedo`](super::UndoRedo) from raw parts
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    /// A history must hold at least the value it was seeded with
    #[error("History snapshot has no entries")]
    EmptyHistory,

    /// The cursor must point at one of the entries
    #[error("History cursor {cursor} is out of bounds for {len} entries")]
    CursorOutOfBounds { cursor: usize, len: usize },
}
