//! Error types for histotex-filter

use thiserror::Error;

/// Errors that can occur during filtering
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] histotex_core::Error),

    /// Invalid kernel parameters
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Unsupported kernel size
    #[error("unsupported kernel size {ksize}, only 3 is supported")]
    UnsupportedKernelSize {
        /// The requested size
        ksize: usize,
    },

    /// Invalid filter parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
