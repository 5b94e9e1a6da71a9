//! Preprocessing chain
//!
//! Every extractor sees the same fixed chain, in this exact order:
//! grayscale (only when the image has 3 trailing channels) → bilinear
//! resize to the configured shape → byte coercion. The resize produces
//! floating-point output, so the byte coercion before the extractor is
//! mandatory; the extractors assume 0-255 unsigned input.

use ndarray::Array2;

use histotex_core::{FeatureConfig, ImageArray, gray_to_ubyte};

use crate::error::FeatureResult;

/// Run the preprocessing chain on one decoded image.
pub fn preprocess(img: &ImageArray, config: &FeatureConfig) -> FeatureResult<Array2<u8>> {
    let gray = img.to_gray();
    let resized = histotex_core::resize_bilinear(&gray, config.shape)?;
    Ok(gray_to_ubyte(&resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_preprocess_shape_and_dtype() {
        let cfg = FeatureConfig {
            shape: (6, 8),
            ..FeatureConfig::default()
        };
        let rgb = ImageArray::Rgb(Array3::from_elem((12, 16, 3), 0.5));
        let out = preprocess(&rgb, &cfg).unwrap();
        assert_eq!(out.dim(), (6, 8));
        // 0.5 gray -> 128 after rounding
        assert!(out.iter().all(|&v| v == 128));
    }

    #[test]
    fn test_preprocess_gray_passthrough_values() {
        let cfg = FeatureConfig {
            shape: (4, 4),
            ..FeatureConfig::default()
        };
        let gray = ImageArray::Gray(Array2::from_elem((4, 4), 1.0));
        let out = preprocess(&gray, &cfg).unwrap();
        assert!(out.iter().all(|&v| v == 255));
    }
}
