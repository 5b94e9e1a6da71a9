//! Error types for histotex-dataset

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during dataset traversal and transform application
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Image decode/encode error
    #[error("image error: {0}")]
    Image(#[from] histotex_io::IoError),

    /// A walked path was not below the dataset root
    #[error("path {path} is not under the dataset root")]
    OutsideRoot { path: PathBuf },

    /// An image transform failed
    #[error("transform error: {0}")]
    Transform(String),
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
