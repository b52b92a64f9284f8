//! Typed failures for sequence operations.

use thiserror::Error;

/// Errors surfaced by [`Sequence`](crate::Sequence) operations.
///
/// `slice` has no variant here on purpose: out-of-range or inverted ranges
/// are defined to produce an empty sequence, not a failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// `pop`, `shift`, or a seedless `reduce` was called on a zero-length
    /// sequence.
    #[error("cannot {op} from an empty sequence")]
    EmptyContainer {
        /// The operation that needed at least one element.
        op: &'static str,
    },

    /// An indexed read past the end, or an indexed write past the end while
    /// auto-extension is disabled.
    #[error("index {index} out of bounds for sequence of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Sequence length at the time of the access.
        len: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SequenceError>;
