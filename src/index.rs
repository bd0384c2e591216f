//! Bounds-safe neighbour lookup over ordered sequences.
//!
//! Positions are signed so that a caller can ask for the successor of the
//! position just before the start (`-1`) or the predecessor of the position
//! just past the end (`len`). The result is only ever a valid index.

/// Predecessor and successor lookup that never yields an out-of-range index.
///
/// # Example
///
/// ```rust
/// use nonstandard::SafeIndex;
///
/// let items = [1, 2, 3];
/// assert_eq!(items.safe_index_before(0), None);
/// assert_eq!(items.safe_index_before(3), Some(2));
/// assert_eq!(items.safe_index_after(2), None);
/// assert_eq!(items.safe_index_after(-1), Some(0));
/// ```
pub trait SafeIndex {
    /// Index immediately before `position`, if it lies within bounds.
    fn safe_index_before(&self, position: isize) -> Option<usize>;

    /// Index immediately after `position`, if it lies within bounds.
    fn safe_index_after(&self, position: isize) -> Option<usize>;
}

impl<T> SafeIndex for [T] {
    fn safe_index_before(&self, position: isize) -> Option<usize> {
        position
            .checked_sub(1)
            .and_then(|index| in_bounds(index, self.len()))
    }

    fn safe_index_after(&self, position: isize) -> Option<usize> {
        position
            .checked_add(1)
            .and_then(|index| in_bounds(index, self.len()))
    }
}

fn in_bounds(index: isize, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|index| *index < len)
}
