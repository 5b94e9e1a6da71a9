//! Output-file naming scheme
//!
//! Persisted artifacts are named after the dataset directory's basename and
//! are written into the current working directory, e.g. a dataset at
//! `/data/Glomerulus` produces `Glomerulus_LBP.npy` and
//! `Glomerulus_GLCM.jpeg`.

use std::path::{Path, PathBuf};

use histotex_core::FeatureKind;

/// File name of the per-image LBP histogram bundle.
pub const LBP_HISTOGRAMS_FILE: &str = "LBP_histograms.npz";

/// File name of the global contrast histogram bundle.
pub const CONTRAST_HISTOGRAM_FILE: &str = "contrast_histogram.npz";

fn dataset_basename(dataset: &Path) -> String {
    dataset
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `.npy` path for one feature map of a dataset.
pub fn feature_map_path(dataset: &Path, kind: FeatureKind) -> PathBuf {
    PathBuf::from(format!("{}_{}.npy", dataset_basename(dataset), kind.tag()))
}

/// `.jpeg` path for the comparison sheet of one feature.
pub fn feature_figure_path(dataset: &Path, kind: FeatureKind) -> PathBuf {
    PathBuf::from(format!("{}_{}.jpeg", dataset_basename(dataset), kind.tag()))
}

/// Root of a mirrored transform tree, e.g. `<dataset>_gaussian`.
pub fn transform_root(dataset: &Path, suffix: &str) -> PathBuf {
    let mut name = dataset.as_os_str().to_os_string();
    name.push("_");
    name.push(suffix);
    PathBuf::from(name)
}
