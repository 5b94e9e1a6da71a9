//! Named dataset transforms
//!
//! One closed enum selects which spatial transform a mirrored dataset tree
//! is built with; the variant also fixes the `_suffix` appended to the new
//! tree's root directory name.

use histotex_core::{ImageArray, SpatialConfig};

use crate::equalize::equalize_hist;
use crate::error::{FilterError, FilterResult};
use crate::gamma::adjust_gamma;
use crate::gaussian::{smooth_fast, GaussianKernel};
use crate::laplace::laplace;

/// A spatial transform applied uniformly to a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialTransform {
    /// Fast separable Gaussian blur
    Gaussian,
    /// Gamma correction with the config's `index`-th gamma/gain pair
    Gamma {
        /// Index into `SpatialConfig::gammas` and `gains`
        index: usize,
    },
    /// Scaled luminance-combined Laplacian
    Laplace,
    /// Channel-wise histogram equalization
    HistEqualize,
}

impl SpatialTransform {
    /// One `Gamma` variant per configured gamma/gain pair.
    pub fn gamma_variants(config: &SpatialConfig) -> FilterResult<Vec<SpatialTransform>> {
        if config.gammas.len() != config.gains.len() {
            return Err(FilterError::InvalidParameters(format!(
                "{} gammas but {} gains",
                config.gammas.len(),
                config.gains.len()
            )));
        }
        Ok((0..config.gammas.len())
            .map(|index| SpatialTransform::Gamma { index })
            .collect())
    }

    /// Suffix appended to the mirrored tree's root directory name.
    pub fn dir_suffix(&self) -> String {
        match self {
            SpatialTransform::Gaussian => "gaussian".to_string(),
            SpatialTransform::Gamma { index } => format!("gamma{}", index + 1),
            SpatialTransform::Laplace => "laplace".to_string(),
            SpatialTransform::HistEqualize => "hist".to_string(),
        }
    }

    /// Apply the transform to one image.
    pub fn apply(&self, img: &ImageArray, config: &SpatialConfig) -> FilterResult<ImageArray> {
        match self {
            SpatialTransform::Gaussian => {
                let kernel = GaussianKernel::truncated(config.sigma, config.truncate)?;
                Ok(smooth_fast(img, &kernel))
            }
            SpatialTransform::Gamma { index } => {
                let (Some(&gamma), Some(&gain)) =
                    (config.gammas.get(*index), config.gains.get(*index))
                else {
                    return Err(FilterError::InvalidParameters(format!(
                        "gamma index {index} out of range ({} configured)",
                        config.gammas.len()
                    )));
                };
                adjust_gamma(img, gamma, gain)
            }
            SpatialTransform::Laplace => laplace(img, config),
            SpatialTransform::HistEqualize => equalize_hist(img, config.hist_bins),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use histotex_test::constant_gray_float;

    #[test]
    fn test_dir_suffixes() {
        let cfg = SpatialConfig::default();
        let gammas = SpatialTransform::gamma_variants(&cfg).unwrap();
        let mut suffixes = vec![SpatialTransform::Gaussian.dir_suffix()];
        suffixes.extend(gammas.iter().map(|t| t.dir_suffix()));
        suffixes.push(SpatialTransform::Laplace.dir_suffix());
        suffixes.push(SpatialTransform::HistEqualize.dir_suffix());
        assert_eq!(
            suffixes,
            ["gaussian", "gamma1", "gamma2", "gamma3", "laplace", "hist"]
        );
    }

    #[test]
    fn test_gamma_index_out_of_range() {
        let cfg = SpatialConfig::default();
        let img = constant_gray_float(2, 2, 0.5);
        let t = SpatialTransform::Gamma { index: 99 };
        assert!(t.apply(&img, &cfg).is_err());
    }

    #[test]
    fn test_mismatched_gamma_gains_rejected() {
        let cfg = SpatialConfig {
            gains: vec![1.0],
            ..SpatialConfig::default()
        };
        assert!(SpatialTransform::gamma_variants(&cfg).is_err());
    }

    #[test]
    fn test_every_transform_runs() {
        let cfg = SpatialConfig::default();
        let img = constant_gray_float(8, 8, 0.5);
        for t in [
            SpatialTransform::Gaussian,
            SpatialTransform::Gamma { index: 0 },
            SpatialTransform::Laplace,
            SpatialTransform::HistEqualize,
        ] {
            let out = t.apply(&img, &cfg).unwrap();
            assert_eq!(out.height(), 8);
            assert_eq!(out.width(), 8);
        }
    }
}
