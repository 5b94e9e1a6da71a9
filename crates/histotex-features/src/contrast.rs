//! GLCM contrast reduction
//!
//! For every (distance, angle) pair the co-occurrence slice is renormalized
//! to a probability matrix and reduced to the texture contrast statistic
//! `Σ P[i,j]·(i−j)²`. A slice whose entries sum to zero reduces to zero.

use ndarray::{Array2, Array4, ArrayView1};

use histotex_core::FeatureConfig;

use crate::error::FeatureResult;
use crate::glcm::tensor_from_row;

/// Contrast per (distance, angle) pair of one GLCM tensor.
///
/// Output shape is `(|distances|, |angles|)`.
pub fn contrast_matrix(tensor: &Array4<f64>) -> Array2<f64> {
    let (levels, _, nd, na) = tensor.dim();
    let mut out = Array2::zeros((nd, na));
    for d in 0..nd {
        for a in 0..na {
            let mut sum = 0.0;
            for i in 0..levels {
                for j in 0..levels {
                    sum += tensor[[i, j, d, a]];
                }
            }
            if sum == 0.0 {
                continue;
            }
            let mut acc = 0.0;
            for i in 0..levels {
                for j in 0..levels {
                    let diff = i as f64 - j as f64;
                    acc += tensor[[i, j, d, a]] / sum * diff * diff;
                }
            }
            out[[d, a]] = acc;
        }
    }
    out
}

/// Contrast matrix from a stored flat GLCM row.
pub fn contrast_from_row(
    row: ArrayView1<f64>,
    config: &FeatureConfig,
) -> FeatureResult<Array2<f64>> {
    let tensor = tensor_from_row(row, config)?;
    Ok(contrast_matrix(&tensor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glcm::{co_occurrence, rescale_normalize};
    use histotex_test::constant_gray;
    use ndarray::array;
    use std::f64::consts::PI;

    #[test]
    fn test_uniform_image_has_zero_contrast() {
        // a constant image only co-occurs with itself, so (i-j)^2 is 0
        let img = constant_gray(8, 8, 77);
        let angles = [0.0, PI * 0.25, PI * 0.5, PI * 0.75, PI];
        let counts = co_occurrence(&img, &[1], &angles, 256).unwrap();
        let tensor = counts.mapv(|v| v as f64);
        let contrast = contrast_matrix(&tensor);
        assert_eq!(contrast.dim(), (1, 5));
        assert!(contrast.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_alternating_stripes_contrast() {
        // alternate 0/1 columns: every horizontal pair differs by 1,
        // so the renormalized contrast is exactly 1
        let img = array![[0u8, 1, 0, 1], [0, 1, 0, 1]];
        let counts = co_occurrence(&img, &[1], &[0.0], 256).unwrap();
        let tensor = counts.mapv(|v| v as f64);
        let contrast = contrast_matrix(&tensor);
        assert!((contrast[[0, 0]] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_scale_invariant() {
        // the per-slice renormalization makes contrast invariant to the
        // lossy tensor rescale
        let img = array![[0u8, 2, 0, 2], [1, 1, 0, 2]];
        let counts = co_occurrence(&img, &[1], &[0.0], 256).unwrap();
        let raw = contrast_matrix(&counts.mapv(|v| v as f64));
        let rescaled = contrast_matrix(&rescale_normalize(&counts));
        assert!((raw[[0, 0]] - rescaled[[0, 0]]).abs() < 1e-6);
    }

    #[test]
    fn test_contrast_from_stored_row() {
        let cfg = FeatureConfig {
            max_level: 3,
            distances: vec![1],
            angles: vec![0.0],
            ..FeatureConfig::default()
        };
        let img = array![[0u8, 1, 0, 1], [0, 1, 0, 1]];
        let counts = co_occurrence(&img, &cfg.distances, &cfg.angles, cfg.levels()).unwrap();
        let tensor = counts.mapv(|v| v as f64);
        let row = crate::glcm::row_from_tensor(&tensor);
        let from_row = contrast_from_row(row.view(), &cfg).unwrap();
        assert_eq!(from_row, contrast_matrix(&tensor));
    }

    #[test]
    fn test_empty_slice_is_zero() {
        let tensor = Array4::zeros((4, 4, 1, 1));
        let contrast = contrast_matrix(&tensor);
        assert_eq!(contrast[[0, 0]], 0.0);
    }
}
