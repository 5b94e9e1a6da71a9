//! Error types for histotex-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Histotex core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {height}x{width}")]
    InvalidDimension { height: usize, width: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Flattened row length does not match the expected element count
    #[error("length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A 3-channel color image was required
    #[error("expected a 3-channel color image")]
    NotColor,
}

/// Result type alias for histotex core operations
pub type Result<T> = std::result::Result<T, Error>;
