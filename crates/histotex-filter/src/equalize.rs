//! Histogram equalization
//!
//! Each channel is equalized independently: a `bins`-bin frequency
//! histogram over the channel's own value range is turned into a
//! normalized CDF, and every pixel is mapped to the CDF value at its
//! intensity, linearly interpolated between bin centers. Binning over the
//! data range means a channel that does not span [0, 1] is still stretched
//! over the full output range.

use ndarray::{Array1, Array2};

use histotex_core::{histogram, ImageArray};

use crate::error::FilterResult;
use crate::plane::map_planes;

/// Piecewise-linear lookup of `x` in `(xs, ys)`; clamps outside the knots.
fn interp(x: f64, xs: &Array1<f64>, ys: &Array1<f64>) -> f64 {
    let n = xs.len();
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }
    let mut i = 1;
    while xs[i] < x {
        i += 1;
    }
    let t = (x - xs[i - 1]) / (xs[i] - xs[i - 1]);
    ys[i - 1] + t * (ys[i] - ys[i - 1])
}

fn equalize_plane(plane: &Array2<f64>, bins: usize) -> FilterResult<Array2<f64>> {
    let values: Vec<f64> = plane.iter().copied().collect();
    let hist = histogram(&values, bins, None)?;
    let centers = hist.centers();

    let total: f64 = hist.counts.sum();
    if total == 0.0 {
        // empty plane
        return Ok(plane.clone());
    }
    let mut cdf = Array1::zeros(bins);
    let mut acc = 0.0;
    for (i, &count) in hist.counts.iter().enumerate() {
        acc += count;
        cdf[i] = acc / total;
    }

    Ok(plane.mapv(|v| interp(v, &centers, &cdf)))
}

/// Equalize the intensity histogram of every channel.
pub fn equalize_hist(img: &ImageArray, bins: usize) -> FilterResult<ImageArray> {
    // map_planes is infallible, so thread the first error out by hand
    let mut failure = None;
    let out = map_planes(img, |plane| match equalize_plane(plane, bins) {
        Ok(eq) => eq,
        Err(e) => {
            failure.get_or_insert(e);
            plane.clone()
        }
    });
    match failure {
        Some(e) => Err(e),
        None => Ok(out),
    }
}
