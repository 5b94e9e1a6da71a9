//! histotex-plot - Diagnostic figures
//!
//! Renders histogram bar charts with plotters into in-memory RGB buffers
//! and lays feature-map reconstructions out as side-by-side comparison
//! sheets. Figures are returned as `image::RgbImage`; encoding to disk is
//! the caller's concern.

pub mod chart;
pub mod error;
pub mod figure;
pub mod sheet;

pub use chart::{bar_chart, histogram_chart, CHART_HEIGHT, CHART_WIDTH};
pub use error::{PlotError, PlotResult};
pub use figure::{
    byte_feature_tile, comparison_sheet, contrast_histogram_figure, glcm_slice_tile,
    lbp_histogram_sheet, FeatureTiles,
};
pub use sheet::{gray_tile, image_tile, thumbnail, tile_grid, GUTTER};
