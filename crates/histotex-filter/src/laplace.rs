//! Laplacian edge response
//!
//! Per channel, 3x3 Laplacian convolution (center 4, cross neighbors -1,
//! symmetric-reflect border), clipped to [0, 1]. The channel responses are
//! combined with the grayscale luminance weights, scaled, and clipped
//! again, yielding a single-channel output.

use ndarray::Array2;

use histotex_core::{ImageArray, LUMA_WEIGHTS, SpatialConfig};

use crate::error::{FilterError, FilterResult};
use crate::plane::planes;

/// Mirror an index into `0..n` (symmetric reflection).
fn reflect(i: i64, n: usize) -> usize {
    let n = n as i64;
    let mut i = i;
    if i < 0 {
        i = -i - 1;
    }
    if i >= n {
        i = 2 * n - 1 - i;
    }
    i as usize
}

fn laplace_plane(plane: &Array2<f64>) -> Array2<f64> {
    let (h, w) = plane.dim();
    let mut out = Array2::zeros((h, w));
    for r in 0..h {
        for c in 0..w {
            let v = plane[[r, c]];
            let up = plane[[reflect(r as i64 - 1, h), c]];
            let down = plane[[reflect(r as i64 + 1, h), c]];
            let left = plane[[r, reflect(c as i64 - 1, w)]];
            let right = plane[[r, reflect(c as i64 + 1, w)]];
            // summed as differences so a constant neighborhood is exactly zero
            out[[r, c]] = (v - up) + (v - down) + (v - left) + (v - right);
        }
    }
    out
}

/// Scaled, luminance-combined Laplacian of an image.
///
/// Only `laplace_ksize = 3` is supported.
pub fn laplace(img: &ImageArray, config: &SpatialConfig) -> FilterResult<ImageArray> {
    if config.laplace_ksize != 3 {
        return Err(FilterError::UnsupportedKernelSize {
            ksize: config.laplace_ksize,
        });
    }

    let responses: Vec<Array2<f64>> = planes(img)
        .iter()
        .map(|p| laplace_plane(p).mapv(|v| v.clamp(0.0, 1.0)))
        .collect();

    let (h, w) = responses[0].dim();
    let mut combined = Array2::zeros((h, w));
    if responses.len() == 1 {
        combined.assign(&responses[0]);
    } else {
        for (weight, response) in LUMA_WEIGHTS.iter().zip(&responses) {
            combined.scaled_add(*weight, response);
        }
    }

    Ok(ImageArray::Gray(
        combined.mapv(|v| (v * config.laplace_scale).clamp(0.0, 1.0)),
    ))
}
