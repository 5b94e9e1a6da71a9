//! Frequency histograms with numpy bin semantics
//!
//! Equal-width bins over [min, max] (or an explicit range); every bin is
//! half-open except the last, which is closed. A degenerate range where
//! min == max widens to [min - 0.5, max + 0.5].

use ndarray::Array1;

use crate::error::{Error, Result};

/// Frequency histogram: `bins` counts and `bins + 1` edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Per-bin counts
    pub counts: Array1<f64>,
    /// Bin edges, ascending, length `counts.len() + 1`
    pub edges: Array1<f64>,
}

impl Histogram {
    /// Bin centers, length `counts.len()`.
    pub fn centers(&self) -> Array1<f64> {
        let bins = self.counts.len();
        Array1::from_shape_fn(bins, |i| (self.edges[i] + self.edges[i + 1]) / 2.0)
    }
}

/// Compute a frequency histogram of `values`.
///
/// With `range = None` the bins span the data's [min, max]; values outside
/// an explicit range are not counted.
pub fn histogram(values: &[f64], bins: usize, range: Option<(f64, f64)>) -> Result<Histogram> {
    if bins == 0 {
        return Err(Error::InvalidParameter("histogram needs bins > 0".into()));
    }

    let (mut lo, mut hi) = match range {
        Some((lo, hi)) => {
            if lo > hi {
                return Err(Error::InvalidParameter(format!(
                    "histogram range inverted: {lo} > {hi}"
                )));
            }
            (lo, hi)
        }
        None => {
            let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            if !lo.is_finite() || !hi.is_finite() {
                // empty input: numpy falls back to [0, 1]
                (0.0, 1.0)
            } else {
                (lo, hi)
            }
        }
    };
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = Array1::zeros(bins);
    for &v in values {
        if v < lo || v > hi {
            continue;
        }
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1.0;
    }

    let edges = Array1::from_shape_fn(bins + 1, |i| lo + i as f64 * width);
    Ok(Histogram { counts, edges })
}
