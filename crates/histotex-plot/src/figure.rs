//! Figure assembly
//!
//! Rebuilds displayable images from persisted feature rows and composes
//! them into the diagnostic sheets: per-feature comparison sheets, the
//! LBP histogram sheet, and the global contrast histogram figure.

use image::RgbImage;
use ndarray::{Array2, ArrayView1};

use histotex_core::{FeatureConfig, Histogram};

use crate::chart::{histogram_chart, CHART_HEIGHT, CHART_WIDTH};
use crate::error::{PlotError, PlotResult};
use crate::sheet::{gray_tile, tile_grid};

/// Rebuild an image tile from one flattened LBP or Sobel row.
pub fn byte_feature_tile(row: ArrayView1<u8>, config: &FeatureConfig) -> PlotResult<RgbImage> {
    let expected = config.image_row_len();
    if row.len() != expected {
        return Err(histotex_core::Error::LengthMismatch {
            expected,
            actual: row.len(),
        }
        .into());
    }
    let map = row.to_owned().into_shape_with_order(config.shape)?;
    Ok(gray_tile(&map))
}

/// Rebuild one (distance, angle) GLCM slice as an image tile, scaled so the
/// brightest co-occurrence is white.
pub fn glcm_slice_tile(
    row: ArrayView1<f64>,
    config: &FeatureConfig,
    distance: usize,
    angle: usize,
) -> PlotResult<RgbImage> {
    let expected = config.glcm_row_len();
    if row.len() != expected {
        return Err(histotex_core::Error::LengthMismatch {
            expected,
            actual: row.len(),
        }
        .into());
    }
    if distance >= config.distances.len() || angle >= config.angles.len() {
        return Err(PlotError::InvalidInput(format!(
            "slice ({distance}, {angle}) outside {}x{} GLCM offsets",
            config.distances.len(),
            config.angles.len()
        )));
    }

    let levels = config.levels();
    let tensor = row.to_owned().into_shape_with_order((
        levels,
        levels,
        config.distances.len(),
        config.angles.len(),
    ))?;
    let slice = tensor.index_axis_move(ndarray::Axis(3), angle);
    let slice = slice.index_axis_move(ndarray::Axis(2), distance);

    let max = slice.iter().cloned().fold(0.0_f64, f64::max);
    let bytes: Array2<u8> = if max > 0.0 {
        slice.mapv(|v| (v / max * 255.0).round() as u8)
    } else {
        Array2::zeros((levels, levels))
    };
    Ok(gray_tile(&bytes))
}

/// One row of a per-feature comparison sheet.
pub struct FeatureTiles {
    /// The decoded dataset image
    pub original: RgbImage,
    /// Its preprocessed grayscale rendition
    pub gray: RgbImage,
    /// The rebuilt feature image
    pub feature: RgbImage,
}

/// Compose a comparison sheet: one row per sampled image, tiles side by
/// side in original | grayscale | feature order.
pub fn comparison_sheet(entries: &[FeatureTiles]) -> PlotResult<RgbImage> {
    let rows: Vec<Vec<RgbImage>> = entries
        .iter()
        .map(|e| vec![e.original.clone(), e.gray.clone(), e.feature.clone()])
        .collect();
    tile_grid(&rows)
}

/// Compose the LBP histogram sheet: original | LBP image | histogram bars.
pub fn lbp_histogram_sheet(
    entries: &[(RgbImage, RgbImage, Histogram)],
) -> PlotResult<RgbImage> {
    let mut rows = Vec::with_capacity(entries.len());
    for (original, lbp, hist) in entries {
        let chart = histogram_chart(hist, CHART_WIDTH, CHART_HEIGHT)?;
        rows.push(vec![original.clone(), lbp.clone(), chart]);
    }
    tile_grid(&rows)
}

/// The global contrast histogram figure.
pub fn contrast_histogram_figure(hist: &Histogram) -> PlotResult<RgbImage> {
    histogram_chart(hist, CHART_WIDTH, CHART_HEIGHT)
}
