//! Figure rendering regression test
//!
//! Builds every figure type from synthetic data and checks the resulting
//! pixel buffers.

use histotex_core::{histogram, FeatureConfig};
use histotex_plot::{
    byte_feature_tile, comparison_sheet, contrast_histogram_figure, glcm_slice_tile,
    lbp_histogram_sheet, thumbnail, FeatureTiles, CHART_HEIGHT, CHART_WIDTH, GUTTER,
};
use image::{Rgb, RgbImage};
use ndarray::Array1;

fn config() -> FeatureConfig {
    FeatureConfig {
        shape: (6, 8),
        max_level: 7,
        distances: vec![1],
        angles: vec![0.0, std::f64::consts::FRAC_PI_2],
        ..FeatureConfig::default()
    }
}

#[test]
fn figure_reg() {
    let cfg = config();

    // --- Test 1: byte feature rows come back as images ---
    let row = Array1::from_shape_fn(48, |i| (i * 5 % 256) as u8);
    let tile = byte_feature_tile(row.view(), &cfg).expect("byte tile");
    assert_eq!(tile.dimensions(), (8, 6));
    assert_eq!(*tile.get_pixel(0, 0), Rgb([0, 0, 0]));

    // --- Test 2: GLCM slices scale to full range ---
    let mut glcm_row = Array1::zeros(8 * 8 * 2);
    glcm_row[0] = 0.25;
    glcm_row[2] = 0.125;
    let slice = glcm_slice_tile(glcm_row.view(), &cfg, 0, 0).expect("glcm tile");
    assert_eq!(slice.dimensions(), (8, 8));
    assert_eq!(*slice.get_pixel(0, 0), Rgb([255, 255, 255]));
    assert_eq!(*slice.get_pixel(1, 0), Rgb([128, 128, 128]));

    // --- Test 3: comparison sheet lays tiles side by side ---
    let entries: Vec<FeatureTiles> = (0..2)
        .map(|_| FeatureTiles {
            original: RgbImage::from_pixel(8, 6, Rgb([10, 10, 10])),
            gray: RgbImage::from_pixel(8, 6, Rgb([20, 20, 20])),
            feature: tile.clone(),
        })
        .collect();
    let sheet = comparison_sheet(&entries).expect("sheet");
    assert_eq!(sheet.width(), 3 * 8 + 4 * GUTTER);
    assert_eq!(sheet.height(), 2 * 6 + 3 * GUTTER);

    // --- Test 4: LBP histogram sheet embeds a chart per row ---
    let codes: Vec<f64> = (0..48).map(|i| (i % 4) as f64).collect();
    let hist = histogram(&codes, 256, None).expect("histogram");
    let lbp_entries = vec![(
        RgbImage::from_pixel(8, 6, Rgb([1, 1, 1])),
        tile.clone(),
        hist.clone(),
    )];
    let lbp_sheet = lbp_histogram_sheet(&lbp_entries).expect("lbp sheet");
    assert!(lbp_sheet.width() >= CHART_WIDTH + 2 * 8);
    assert!(lbp_sheet.height() >= CHART_HEIGHT);

    // --- Test 5: the global contrast figure is a bare chart ---
    let figure = contrast_histogram_figure(&hist).expect("contrast figure");
    assert_eq!(figure.dimensions(), (CHART_WIDTH, CHART_HEIGHT));

    // --- Test 6: thumbnails bound the tile size ---
    let big = RgbImage::from_pixel(800, 600, Rgb([3, 3, 3]));
    let small = thumbnail(&big, 200);
    assert_eq!(small.dimensions(), (200, 150));
}
