//! Histotex - Texture feature extraction for image datasets
//!
//! # Overview
//!
//! Histotex walks a directory tree of images and computes classic texture
//! features for every image:
//!
//! - Local binary patterns (LBP)
//! - Gray-level co-occurrence tensors (GLCM) and their contrast statistic
//! - Sobel gradient magnitude
//!
//! Feature maps persist as `.npy` arrays, histograms as compressed `.npz`
//! bundles, and diagnostic figures as JPEG sheets. A set of spatial
//! filters (Gaussian, gamma, Laplace, histogram equalization and friends)
//! builds transformed copies of a dataset in mirrored directory trees.
//!
//! # Example
//!
//! ```no_run
//! use histotex::{Dataset, FeatureConfig};
//! use histotex::features::extract;
//!
//! let config = FeatureConfig::default();
//! let dataset = Dataset::new("treino", &config);
//! let maps = extract(&dataset, &config, |_, _| {})?;
//! assert_eq!(maps.lbp.nrows(), maps.contrast.nrows());
//! # Ok::<(), histotex::features::FeatureError>(())
//! ```

// Re-export core types (config and image containers used everywhere)
pub use histotex_core::*;
pub use histotex_dataset::Dataset;

// Re-export domain crates as modules to avoid name conflicts
pub use histotex_dataset as dataset;
pub use histotex_features as features;
pub use histotex_filter as filter;
pub use histotex_io as io;
pub use histotex_plot as plot;
