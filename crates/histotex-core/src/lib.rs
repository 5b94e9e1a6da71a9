//! Histotex Core - Shared data structures for the feature pipeline
//!
//! This crate provides the types used throughout the histotex workspace:
//!
//! - [`FeatureConfig`] / [`SpatialConfig`] - immutable run configuration
//! - [`FeatureKind`] - the closed set of persisted feature maps
//! - [`ImageArray`] - normalized-float image container (gray or color)
//! - [`Histogram`] - frequency histogram with numpy bin semantics
//! - [`Error`] / [`Result`] - unified error handling for core operations

pub mod config;
pub mod error;
pub mod histogram;
pub mod image;

pub use config::{FeatureConfig, FeatureKind, SpatialConfig};
pub use error::{Error, Result};
pub use histogram::{Histogram, histogram};
pub use image::{
    ImageArray, LUMA_WEIGHTS, gray_to_float, gray_to_ubyte, resize_bilinear, rgb_to_ubyte,
};
