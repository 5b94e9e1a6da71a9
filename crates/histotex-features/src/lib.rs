//! histotex-features - Texture feature extraction
//!
//! Local binary patterns, gray-level co-occurrence tensors, Sobel gradient
//! magnitude and GLCM contrast statistics, plus the single-pass dataset
//! driver that turns a directory of images into per-image feature rows.
//!
//! # Example
//!
//! ```ignore
//! use histotex_core::FeatureConfig;
//! use histotex_dataset::Dataset;
//! use histotex_features::extract;
//!
//! let cfg = FeatureConfig::default();
//! let ds = Dataset::new("treino", &cfg);
//! let maps = extract(&ds, &cfg, |i, path| println!("{i}: {}", path.display()))?;
//! # Ok::<(), histotex_features::FeatureError>(())
//! ```

pub mod contrast;
pub mod error;
pub mod extract;
pub mod glcm;
pub mod lbp;
pub mod preprocess;
pub mod sobel;

pub use contrast::{contrast_from_row, contrast_matrix};
pub use error::{FeatureError, FeatureResult};
pub use extract::{extract, FeatureMaps};
pub use glcm::{co_occurrence, rescale_normalize, row_from_tensor, tensor_from_row};
pub use lbp::local_binary_pattern;
pub use preprocess::preprocess;
pub use sobel::sobel_magnitude;
