//! Histogram bundle construction
//!
//! Turns persisted feature maps into the `.npz` bundle contents: per-image
//! LBP code histograms (bin edges normalized by each row's largest edge)
//! and one dataset-wide histogram of the first co-occurrence contrast
//! column.

use ndarray::Array2;

use histotex_core::histogram;

use crate::error::IoResult;
use crate::npy::{ContrastHistogramBundle, LbpHistogramBundle};

/// Bin count of the per-image LBP histograms.
pub const LBP_BINS: usize = 256;
/// Bin count of the global contrast histogram.
pub const CONTRAST_BINS: usize = 10;
/// At most this many contrast values enter the global histogram.
pub const CONTRAST_VALUE_LIMIT: usize = 10_000;

/// Histogram every row of an LBP map.
///
/// Bins span each row's own value range; each edge row is divided by its
/// maximum edge, mapping the edges onto [0, 1] (or onto negative-anchored
/// ratios when all codes are equal, matching the stored convention).
pub fn lbp_histogram_bundle(map: &Array2<u8>) -> IoResult<LbpHistogramBundle> {
    let rows = map.nrows();
    let mut histograms = Array2::zeros((rows, LBP_BINS));
    let mut bin_edges = Array2::zeros((rows, LBP_BINS + 1));

    for (i, row) in map.rows().into_iter().enumerate() {
        let values: Vec<f64> = row.iter().map(|&v| v as f64).collect();
        let hist = histogram(&values, LBP_BINS, None)?;

        let max_edge = hist.edges[LBP_BINS];
        histograms.row_mut(i).assign(&hist.counts);
        bin_edges
            .row_mut(i)
            .assign(&hist.edges.mapv(|e| e / max_edge));
    }

    Ok(LbpHistogramBundle {
        histograms,
        bin_edges,
    })
}

/// Histogram the first contrast column of a contrast map.
///
/// Only the first [`CONTRAST_VALUE_LIMIT`] rows contribute.
pub fn contrast_histogram_bundle(map: &Array2<f64>) -> IoResult<ContrastHistogramBundle> {
    let take = map.nrows().min(CONTRAST_VALUE_LIMIT);
    let values: Vec<f64> = map.column(0).iter().take(take).copied().collect();
    let hist = histogram(&values, CONTRAST_BINS, None)?;
    Ok(ContrastHistogramBundle {
        histogram: hist.counts,
        bin_edges: hist.edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_lbp_bundle_shapes() {
        let map = array![[0u8, 255, 255, 3], [7, 7, 7, 7]];
        let bundle = lbp_histogram_bundle(&map).unwrap();
        assert_eq!(bundle.histograms.dim(), (2, LBP_BINS));
        assert_eq!(bundle.bin_edges.dim(), (2, LBP_BINS + 1));
        // every code of row 0 is counted somewhere
        assert_eq!(bundle.histograms.row(0).sum(), 4.0);
    }

    #[test]
    fn test_lbp_edges_normalized() {
        let map = array![[0u8, 128, 255]];
        let bundle = lbp_histogram_bundle(&map).unwrap();
        let edges = bundle.bin_edges.row(0);
        assert!((edges[LBP_BINS] - 1.0).abs() < 1e-12);
        assert!((edges[0] - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_contrast_bundle_counts_first_column() {
        let map = array![[1.0, 9.0], [2.0, 9.0], [3.0, 9.0]];
        let bundle = contrast_histogram_bundle(&map).unwrap();
        assert_eq!(bundle.histogram.len(), CONTRAST_BINS);
        assert_eq!(bundle.bin_edges.len(), CONTRAST_BINS + 1);
        assert_eq!(bundle.histogram.sum(), 3.0);
        // bins span the column's own range
        assert!((bundle.bin_edges[0] - 1.0).abs() < 1e-12);
        assert!((bundle.bin_edges[CONTRAST_BINS] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_map_yields_empty_bundle() {
        let map = Array2::<u8>::zeros((0, 4));
        let bundle = lbp_histogram_bundle(&map).unwrap();
        assert_eq!(bundle.histograms.nrows(), 0);
    }
}
