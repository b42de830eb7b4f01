use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// A non-empty range reaches past the end of the slice, or a merge split point lies outside
    /// its range.
    #[error("invalid range [{left}, {right}] for a slice of length {len}")]
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },
}
