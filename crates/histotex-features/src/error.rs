//! Error types for histotex-features

use thiserror::Error;

/// Errors that can occur during feature extraction
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] histotex_core::Error),

    /// Dataset traversal or decode error
    #[error("dataset error: {0}")]
    Dataset(#[from] histotex_dataset::DatasetError),

    /// Array reshape error
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for feature extraction
pub type FeatureResult<T> = Result<T, FeatureError>;
