//! Error types for password composition.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The per-class minimums do not fit in the requested length.
    ///
    /// `required` is widened so a sum past `usize::MAX` is still reported exactly.
    #[error("sum of minimum counts ({required}) exceeds total length ({total_length})")]
    CountsExceedLength { required: u128, total_length: usize },
    /// A raw input field could not be read as a non-negative integer.
    #[error("invalid input for {field}: expected a non-negative integer, got {value:?}")]
    InvalidInput { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, GenerationError>;
