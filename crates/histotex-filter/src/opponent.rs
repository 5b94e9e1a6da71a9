//! Opponent color transform and per-channel normalization

use ndarray::Array3;

use histotex_core::ImageArray;

use crate::error::FilterResult;
use crate::plane::map_planes;

/// Rotate RGB into the opponent color space, clipped to [0, 1].
///
/// `O1 = (R - G) / sqrt(2)`, `O2 = (R + G - 2B) / sqrt(6)`,
/// `O3 = (R + G + B) / sqrt(3)`. Grayscale input is rejected.
pub fn opponent_color(img: &ImageArray) -> FilterResult<ImageArray> {
    let rgb = img.as_rgb()?;
    let (h, w, _) = rgb.dim();

    let s2 = 2.0_f64.sqrt();
    let s6 = 6.0_f64.sqrt();
    let s3 = 3.0_f64.sqrt();

    let mut out = Array3::zeros((h, w, 3));
    for r in 0..h {
        for c in 0..w {
            let (red, green, blue) = (rgb[[r, c, 0]], rgb[[r, c, 1]], rgb[[r, c, 2]]);
            out[[r, c, 0]] = ((red - green) / s2).clamp(0.0, 1.0);
            out[[r, c, 1]] = ((red + green - 2.0 * blue) / s6).clamp(0.0, 1.0);
            out[[r, c, 2]] = ((red + green + blue) / s3).clamp(0.0, 1.0);
        }
    }
    Ok(ImageArray::Rgb(out))
}

/// Standardize every channel to zero mean and unit deviation, then clip
/// to [0, 1]. A zero-variance channel maps to all zeros.
pub fn normalize_channels(img: &ImageArray) -> ImageArray {
    map_planes(img, |plane| {
        let n = plane.len() as f64;
        let mean = plane.sum() / n;
        let var = plane.mapv(|v| (v - mean) * (v - mean)).sum() / n;
        let std = var.sqrt();
        if std == 0.0 {
            return plane.mapv(|_| 0.0);
        }
        plane.mapv(|v| ((v - mean) / std).clamp(0.0, 1.0))
    })
}
