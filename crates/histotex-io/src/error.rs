//! Error types for histotex-io
//!
//! Wraps codec and array-format errors behind one crate-level enum.

use thiserror::Error;

/// Errors that can occur during image or array-file I/O
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] histotex_core::Error),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decode/encode error
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// npy read error
    #[error("npy read error: {0}")]
    NpyRead(#[from] ndarray_npy::ReadNpyError),

    /// npy write error
    #[error("npy write error: {0}")]
    NpyWrite(#[from] ndarray_npy::WriteNpyError),

    /// npz read error
    #[error("npz read error: {0}")]
    NpzRead(#[from] ndarray_npy::ReadNpzError),

    /// npz write error
    #[error("npz write error: {0}")]
    NpzWrite(#[from] ndarray_npy::WriteNpzError),

    /// Pixel buffer did not match the stated dimensions
    #[error("encode error: {0}")]
    Encode(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
