//! Error types for tower-cost.

use thiserror::Error;

/// Result type for tower-cost operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundary of a cost evaluation.
///
/// Every finite tower whose intermediate values fit the height type evaluates
/// successfully; these only fire for inputs outside that domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A real-valued height is NaN or infinite.
    #[error("height at index {index} is not finite")]
    NonFinite { index: usize },

    /// An intermediate value does not fit the height type.
    #[error("arithmetic overflow while evaluating index {index}")]
    Overflow { index: usize },

    /// A per-index query named a position with no predecessor.
    #[error("index {index} has no contribution in a tower of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The exhaustive oracle was asked to enumerate too large a tower.
    #[error("exhaustive evaluation supports at most {max} heights, got {len}")]
    TooLongForExhaustive { len: usize, max: usize },
}
