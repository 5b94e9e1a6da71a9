//! Pipeline configuration values
//!
//! All tunable constants of the pipeline live in explicit immutable config
//! structs that are passed by reference into every component. The defaults
//! are the reference values used for the histology dataset runs.

use std::f64::consts::PI;

/// Configuration for the feature-extraction pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureConfig {
    /// Target (rows, cols) every image is resized to before extraction
    pub shape: (usize, usize),
    /// Number of LBP neighbor samples (`P`)
    pub neighbors: u32,
    /// LBP sampling radius (`R`)
    pub radius: f64,
    /// Pixel-offset magnitudes for the GLCM
    pub distances: Vec<usize>,
    /// Pixel-offset angles (radians) for the GLCM
    pub angles: Vec<f64>,
    /// Maximum intensity level; the GLCM has `max_level + 1` gray levels
    pub max_level: u16,
    /// Directory-path suffixes excluded from traversal
    pub ignore_dirs: Vec<String>,
    /// File-name suffixes accepted as images
    pub allowed_extensions: Vec<String>,
    /// Maximum number of dataset items processed in a run (None = unlimited)
    pub cutoff: Option<usize>,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            shape: (768, 1024),
            neighbors: 8,
            radius: 1.0,
            distances: vec![1],
            angles: vec![0.0, PI * 0.25, PI * 0.5, PI * 0.75, PI],
            max_level: 255,
            ignore_dirs: vec!["Crescente".to_string()],
            allowed_extensions: vec![
                "jpg".to_string(),
                "png".to_string(),
                "JPG".to_string(),
                "jpeg".to_string(),
            ],
            cutoff: None,
        }
    }
}

impl FeatureConfig {
    /// Number of gray levels in the GLCM (`max_level + 1`).
    pub fn levels(&self) -> usize {
        self.max_level as usize + 1
    }

    /// Flattened width of one GLCM row: `levels^2 * |distances| * |angles|`.
    pub fn glcm_row_len(&self) -> usize {
        self.levels() * self.levels() * self.distances.len() * self.angles.len()
    }

    /// Flattened width of one LBP or Sobel row: `rows * cols`.
    pub fn image_row_len(&self) -> usize {
        self.shape.0 * self.shape.1
    }

    /// Flattened width of one contrast row: `|distances| * |angles|`.
    pub fn contrast_row_len(&self) -> usize {
        self.distances.len() * self.angles.len()
    }

    /// Number of rows to allocate for a dataset of `len` images.
    pub fn bounded_len(&self, len: usize) -> usize {
        match self.cutoff {
            Some(c) => len.min(c),
            None => len,
        }
    }
}

/// Configuration for the spatial-transform tools.
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialConfig {
    /// Standard deviation of the Gaussian blur
    pub sigma: f64,
    /// Half-width of the fast Gaussian kernel is `round(truncate * sigma)`
    pub truncate: f64,
    /// Half-width of the naive (direct convolution) Gaussian kernel
    pub naive_half_width: usize,
    /// Gamma exponents, one mirrored output tree per entry
    pub gammas: Vec<f64>,
    /// Gain constants paired with `gammas`
    pub gains: Vec<f64>,
    /// Laplace kernel size (only 3 is supported)
    pub laplace_ksize: usize,
    /// Scale applied to the combined Laplace response before the final clip
    pub laplace_scale: f64,
    /// Bin count for channel-wise histogram equalization
    pub hist_bins: usize,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            sigma: 5.0,
            truncate: 4.0,
            naive_half_width: 10,
            gammas: vec![0.1, 0.6, 2.5],
            gains: vec![1.0, 1.0, 1.0],
            laplace_ksize: 3,
            laplace_scale: 10.0,
            hist_bins: 256,
        }
    }
}

/// The feature maps the pipeline extracts and persists.
///
/// One array file is written per feature per dataset, named
/// `<dataset-basename>_<tag>.npy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// Local binary patterns, one u8 code per pixel
    Lbp,
    /// Gray-level co-occurrence tensor, rescale-normalized to [0, 1]
    Glcm,
    /// Sobel gradient magnitude, byte-coerced
    Sobel,
    /// GLCM contrast statistic per (distance, angle) pair
    Contrast,
}

impl FeatureKind {
    /// All feature kinds in extraction order.
    pub const ALL: [FeatureKind; 4] = [
        FeatureKind::Lbp,
        FeatureKind::Glcm,
        FeatureKind::Sobel,
        FeatureKind::Contrast,
    ];

    /// File-name tag used in persisted array names.
    pub fn tag(&self) -> &'static str {
        match self {
            FeatureKind::Lbp => "LBP",
            FeatureKind::Glcm => "GLCM",
            FeatureKind::Sobel => "sobel",
            FeatureKind::Contrast => "contrast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_row_widths() {
        let cfg = FeatureConfig::default();
        assert_eq!(cfg.levels(), 256);
        assert_eq!(cfg.image_row_len(), 768 * 1024);
        assert_eq!(cfg.glcm_row_len(), 256 * 256 * 5);
        assert_eq!(cfg.contrast_row_len(), 5);
    }

    #[test]
    fn test_bounded_len() {
        let mut cfg = FeatureConfig::default();
        assert_eq!(cfg.bounded_len(42), 42);
        cfg.cutoff = Some(10);
        assert_eq!(cfg.bounded_len(42), 10);
        assert_eq!(cfg.bounded_len(3), 3);
    }

    #[test]
    fn test_feature_tags() {
        let tags: Vec<_> = FeatureKind::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags, ["LBP", "GLCM", "sobel", "contrast"]);
    }
}
