//! Error types for histotex-plot

use thiserror::Error;

/// Errors that can occur while building figures
#[derive(Debug, Error)]
pub enum PlotError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] histotex_core::Error),

    /// Array reshape error
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Backend drawing error
    #[error("draw error: {0}")]
    Draw(String),

    /// Pixel buffer assembly error
    #[error("buffer error: {0}")]
    Buffer(String),

    /// Invalid figure input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for figure building
pub type PlotResult<T> = Result<T, PlotError>;
