//! Image array container and pixel conversions
//!
//! Images travel through the pipeline as normalized `f64` arrays in
//! [0, 1]: `Array2` for grayscale, `Array3` (rows x cols x 3) for color.
//! Byte coercion rounds to the nearest of 256 levels after clamping,
//! matching the unsigned-byte convention of the persisted feature maps.

use ndarray::{Array2, Array3};

use crate::error::{Error, Result};

/// Luminance weights used for color-to-grayscale reduction.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2125, 0.7154, 0.0721];

/// A decoded image: grayscale or 3-channel color, values in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub enum ImageArray {
    /// Single-channel image, (rows, cols)
    Gray(Array2<f64>),
    /// 3-channel color image, (rows, cols, 3)
    Rgb(Array3<f64>),
}

impl ImageArray {
    /// Number of rows.
    pub fn height(&self) -> usize {
        match self {
            ImageArray::Gray(a) => a.nrows(),
            ImageArray::Rgb(a) => a.dim().0,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        match self {
            ImageArray::Gray(a) => a.ncols(),
            ImageArray::Rgb(a) => a.dim().1,
        }
    }

    /// True when the image has exactly 3 trailing channels.
    pub fn is_color(&self) -> bool {
        matches!(self, ImageArray::Rgb(_))
    }

    /// Reduce to grayscale with the luminance weights; grayscale input is
    /// passed through unchanged.
    pub fn to_gray(&self) -> Array2<f64> {
        match self {
            ImageArray::Gray(a) => a.clone(),
            ImageArray::Rgb(a) => {
                let (h, w, _) = a.dim();
                Array2::from_shape_fn((h, w), |(r, c)| {
                    LUMA_WEIGHTS[0] * a[[r, c, 0]]
                        + LUMA_WEIGHTS[1] * a[[r, c, 1]]
                        + LUMA_WEIGHTS[2] * a[[r, c, 2]]
                })
            }
        }
    }

    /// Borrow the color planes, failing on grayscale input.
    pub fn as_rgb(&self) -> Result<&Array3<f64>> {
        match self {
            ImageArray::Rgb(a) => Ok(a),
            ImageArray::Gray(_) => Err(Error::NotColor),
        }
    }

    /// Clamp every value to [0, 1].
    pub fn clipped(self) -> ImageArray {
        match self {
            ImageArray::Gray(a) => ImageArray::Gray(a.mapv(|v| v.clamp(0.0, 1.0))),
            ImageArray::Rgb(a) => ImageArray::Rgb(a.mapv(|v| v.clamp(0.0, 1.0))),
        }
    }

    /// Resize to `(rows, cols)` with bilinear interpolation, per channel.
    pub fn resized(&self, shape: (usize, usize)) -> Result<ImageArray> {
        match self {
            ImageArray::Gray(a) => Ok(ImageArray::Gray(resize_bilinear(a, shape)?)),
            ImageArray::Rgb(a) => {
                let (_, _, ch) = a.dim();
                let mut out = Array3::zeros((shape.0, shape.1, ch));
                for k in 0..ch {
                    let plane = a.index_axis(ndarray::Axis(2), k).to_owned();
                    let resized = resize_bilinear(&plane, shape)?;
                    for r in 0..shape.0 {
                        for c in 0..shape.1 {
                            out[[r, c, k]] = resized[[r, c]];
                        }
                    }
                }
                Ok(ImageArray::Rgb(out))
            }
        }
    }
}

/// Convert a normalized-float grayscale array to bytes (round, clamp).
pub fn gray_to_ubyte(img: &Array2<f64>) -> Array2<u8> {
    img.mapv(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Convert a byte grayscale array to normalized floats.
pub fn gray_to_float(img: &Array2<u8>) -> Array2<f64> {
    img.mapv(|v| v as f64 / 255.0)
}

/// Convert a normalized-float color array to bytes (round, clamp).
pub fn rgb_to_ubyte(img: &Array3<f64>) -> Array3<u8> {
    img.mapv(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Bilinear resize of a single channel to `(rows, cols)`.
///
/// Sample positions are pixel-center aligned and clamped at the borders,
/// so a same-shape resize is the identity.
pub fn resize_bilinear(src: &Array2<f64>, shape: (usize, usize)) -> Result<Array2<f64>> {
    let (sh, sw) = src.dim();
    let (dh, dw) = shape;
    if sh == 0 || sw == 0 || dh == 0 || dw == 0 {
        return Err(Error::InvalidDimension {
            height: dh,
            width: dw,
        });
    }
    if (sh, sw) == (dh, dw) {
        return Ok(src.clone());
    }

    let scale_r = sh as f64 / dh as f64;
    let scale_c = sw as f64 / dw as f64;
    let mut out = Array2::zeros((dh, dw));
    for r in 0..dh {
        let sr = ((r as f64 + 0.5) * scale_r - 0.5).clamp(0.0, (sh - 1) as f64);
        let r0 = sr.floor() as usize;
        let r1 = (r0 + 1).min(sh - 1);
        let fr = sr - r0 as f64;
        for c in 0..dw {
            let sc = ((c as f64 + 0.5) * scale_c - 0.5).clamp(0.0, (sw - 1) as f64);
            let c0 = sc.floor() as usize;
            let c1 = (c0 + 1).min(sw - 1);
            let fc = sc - c0 as f64;

            let top = src[[r0, c0]] * (1.0 - fc) + src[[r0, c1]] * fc;
            let bot = src[[r1, c0]] * (1.0 - fc) + src[[r1, c1]] * fc;
            out[[r, c]] = top * (1.0 - fr) + bot * fr;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_to_gray_passthrough() {
        let gray = ImageArray::Gray(array![[0.0, 0.5], [1.0, 0.25]]);
        assert_eq!(gray.to_gray(), array![[0.0, 0.5], [1.0, 0.25]]);
    }

    #[test]
    fn test_to_gray_luma_weights() {
        let mut rgb = Array3::zeros((1, 1, 3));
        rgb[[0, 0, 0]] = 1.0;
        let gray = ImageArray::Rgb(rgb).to_gray();
        assert!((gray[[0, 0]] - LUMA_WEIGHTS[0]).abs() < 1e-12);
    }

    #[test]
    fn test_ubyte_round_trip_extremes() {
        let img = array![[0.0, 1.0], [0.5, 2.0]];
        let bytes = gray_to_ubyte(&img);
        assert_eq!(bytes[[0, 0]], 0);
        assert_eq!(bytes[[0, 1]], 255);
        assert_eq!(bytes[[1, 0]], 128);
        // out-of-range input is clamped before scaling
        assert_eq!(bytes[[1, 1]], 255);
    }

    #[test]
    fn test_resize_identity() {
        let img = array![[0.1, 0.2], [0.3, 0.4]];
        let out = resize_bilinear(&img, (2, 2)).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_resize_constant_stays_constant() {
        let img = Array2::from_elem((6, 9), 0.4);
        let out = resize_bilinear(&img, (3, 4)).unwrap();
        for v in out.iter() {
            assert!((v - 0.4).abs() < 1e-12);
        }
    }

    #[test]
    fn test_resize_zero_dim_rejected() {
        let img = Array2::from_elem((4, 4), 0.0);
        assert!(resize_bilinear(&img, (0, 3)).is_err());
    }

    #[test]
    fn test_as_rgb_on_gray_fails() {
        let gray = ImageArray::Gray(Array2::zeros((2, 2)));
        assert!(gray.as_rgb().is_err());
    }
}
