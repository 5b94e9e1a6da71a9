//! Single-pass dataset feature extraction
//!
//! Walks a dataset once, preprocesses each image once, and fills one row
//! per image in every feature matrix. Row `i` always corresponds to the
//! `i`-th path in traversal order, across all four matrices.

use std::path::Path;

use ndarray::Array2;

use histotex_core::{gray_to_ubyte, FeatureConfig};
use histotex_dataset::Dataset;

use crate::contrast::contrast_matrix;
use crate::error::FeatureResult;
use crate::glcm::{co_occurrence, rescale_normalize, row_from_tensor};
use crate::lbp::local_binary_pattern;
use crate::preprocess::preprocess;
use crate::sobel::sobel_magnitude;

/// All per-image feature rows of one dataset, in traversal order.
#[derive(Debug, Clone)]
pub struct FeatureMaps {
    /// LBP codes, one flattened `rows * cols` row per image
    pub lbp: Array2<u8>,
    /// Rescale-normalized GLCM tensors, one flattened row per image
    pub glcm: Array2<f64>,
    /// Byte-coerced Sobel gradient magnitudes, one flattened row per image
    pub sobel: Array2<u8>,
    /// Contrast per (distance, angle), one flattened row per image
    pub contrast: Array2<f64>,
}

impl FeatureMaps {
    /// Number of images the maps cover.
    pub fn len(&self) -> usize {
        self.lbp.nrows()
    }

    /// True when no image was processed.
    pub fn is_empty(&self) -> bool {
        self.lbp.nrows() == 0
    }
}

/// Extract every feature for every image of `dataset`.
///
/// `on_image` is invoked with the row index and path before each image is
/// processed, for progress reporting. Honors the config cutoff.
pub fn extract<F>(
    dataset: &Dataset,
    config: &FeatureConfig,
    mut on_image: F,
) -> FeatureResult<FeatureMaps>
where
    F: FnMut(usize, &Path),
{
    let rows = config.bounded_len(dataset.len());
    let mut maps = FeatureMaps {
        lbp: Array2::zeros((rows, config.image_row_len())),
        glcm: Array2::zeros((rows, config.glcm_row_len())),
        sobel: Array2::zeros((rows, config.image_row_len())),
        contrast: Array2::zeros((rows, config.contrast_row_len())),
    };

    for (i, item) in dataset.images().take(rows).enumerate() {
        let (path, img) = item?;
        on_image(i, &path);

        let gray = preprocess(&img, config)?;

        let lbp = local_binary_pattern(&gray, config.neighbors, config.radius);
        maps.lbp
            .row_mut(i)
            .assign(&lbp.into_shape_with_order(config.image_row_len())?);

        let counts = co_occurrence(&gray, &config.distances, &config.angles, config.levels())?;
        let tensor = rescale_normalize(&counts);
        maps.glcm.row_mut(i).assign(&row_from_tensor(&tensor));

        let sobel = gray_to_ubyte(&sobel_magnitude(&gray));
        maps.sobel
            .row_mut(i)
            .assign(&sobel.into_shape_with_order(config.image_row_len())?);

        let contrast = contrast_matrix(&tensor);
        maps.contrast.row_mut(i).assign(
            &contrast.into_shape_with_order(config.contrast_row_len())?,
        );
    }

    Ok(maps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use histotex_test::TempDataset;

    fn small_config() -> FeatureConfig {
        FeatureConfig {
            shape: (16, 16),
            ..FeatureConfig::default()
        }
    }

    #[test]
    fn test_extract_shapes_and_order() {
        let ds = TempDataset::new().unwrap();
        ds.add_solid_png("a.png", [10, 10, 10], 8, 8).unwrap();
        ds.add_solid_png("b.png", [200, 200, 200], 8, 8).unwrap();

        let cfg = small_config();
        let dataset = Dataset::new(ds.root(), &cfg);
        let mut seen = Vec::new();
        let maps = extract(&dataset, &cfg, |i, p| {
            seen.push((i, p.to_path_buf()));
        })
        .unwrap();

        assert_eq!(maps.len(), 2);
        assert_eq!(maps.lbp.dim(), (2, 16 * 16));
        assert_eq!(maps.glcm.dim(), (2, 256 * 256 * 5));
        assert_eq!(maps.sobel.dim(), (2, 16 * 16));
        assert_eq!(maps.contrast.dim(), (2, 5));
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, 0);
        assert_eq!(seen[1].0, 1);
    }

    #[test]
    fn test_extract_honors_cutoff() {
        let ds = TempDataset::new().unwrap();
        ds.add_solid_png("a.png", [10, 10, 10], 8, 8).unwrap();
        ds.add_solid_png("b.png", [20, 20, 20], 8, 8).unwrap();
        ds.add_solid_png("c.png", [30, 30, 30], 8, 8).unwrap();

        let cfg = FeatureConfig {
            cutoff: Some(2),
            ..small_config()
        };
        let dataset = Dataset::new(ds.root(), &cfg);
        let maps = extract(&dataset, &cfg, |_, _| {}).unwrap();
        assert_eq!(maps.len(), 2);
    }

    #[test]
    fn test_constant_image_rows() {
        // a solid image has all-zero contrast and a flat Sobel response
        let ds = TempDataset::new().unwrap();
        ds.add_solid_png("a.png", [128, 128, 128], 8, 8).unwrap();

        let cfg = small_config();
        let dataset = Dataset::new(ds.root(), &cfg);
        let maps = extract(&dataset, &cfg, |_, _| {}).unwrap();
        assert!(maps.contrast.row(0).iter().all(|&v| v == 0.0));
        assert!(maps.sobel.row(0).iter().all(|&v| v == 0));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = TempDataset::new().unwrap();
        let cfg = small_config();
        let dataset = Dataset::new(ds.root(), &cfg);
        let maps = extract(&dataset, &cfg, |_, _| {}).unwrap();
        assert!(maps.is_empty());
    }
}
