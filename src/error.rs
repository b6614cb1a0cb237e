//! Error types and result utilities for transform operations.

use thiserror::Error;

/// Convenience type alias for results that may contain TransformError
pub type TransformResult<T> = Result<T, TransformError>;

/// Error types that can occur during transform operations.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Error that occurs when invalid parameters are provided to an operation.
    ///
    /// This includes a zero transform size at construction and an empty
    /// coefficient buffer passed to the inverse transform.
    #[error("Invalid parameter error: {0}")]
    InvalidParameter(String),

    /// Error that occurs when buffer dimensions don't match expected values.
    ///
    /// This happens when an input or output buffer is longer than the
    /// transform size the engine was constructed with.
    #[error("Dimension mismatch error: {0}")]
    DimensionMismatch(String),
}
