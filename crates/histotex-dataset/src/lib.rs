//! histotex-dataset - Dataset traversal and lazy image iteration
//!
//! A [`Dataset`] enumerates the image files below a root directory in a
//! deterministic depth-first order, supports single- and multi-index
//! lookup, lazy decode with transform chains, and mirroring the directory
//! structure under a new root for the spatial-transform tools.

mod error;
mod mirror;
mod walker;

pub use error::{DatasetError, DatasetResult};
pub use walker::Dataset;
