//! histotex-io - Image and array-file I/O
//!
//! This crate provides:
//!
//! - Image decode/encode between files and [`histotex_core::ImageArray`]
//! - `.npy` persistence of dataset-wide feature maps
//! - Compressed `.npz` histogram bundles
//! - The output-file naming scheme shared by the tools

mod error;
pub mod histograms;
pub mod image_io;
pub mod naming;
pub mod npy;

pub use error::{IoError, IoResult};
pub use histograms::{
    contrast_histogram_bundle, lbp_histogram_bundle, CONTRAST_BINS, CONTRAST_VALUE_LIMIT, LBP_BINS,
};
pub use image_io::{read_image, write_image, write_jpeg};
pub use naming::{
    CONTRAST_HISTOGRAM_FILE, LBP_HISTOGRAMS_FILE, feature_figure_path, feature_map_path,
    transform_root,
};
pub use npy::{
    ContrastHistogramBundle, LbpHistogramBundle, load_contrast_histogram, load_lbp_histograms,
    load_map_f64, load_map_u8, save_contrast_histogram, save_lbp_histograms, save_map_f64,
    save_map_u8,
};
