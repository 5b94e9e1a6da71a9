//! Gaussian smoothing
//!
//! Two implementations of the same blur share one kernel: a naive direct
//! convolution with the full 2-D outer-product kernel, kept deliberately
//! unoptimized as a reference, and a fast separable two-pass convolution.
//! Both use zero padding outside the image. The 1-D kernel samples the
//! Gaussian density at integer offsets and is normalized to unit sum, so a
//! constant image is invariant at interior pixels and half-width 0 is the
//! identity.

use ndarray::{Array1, Array2};

use histotex_core::ImageArray;

use crate::error::{FilterError, FilterResult};
use crate::plane::map_planes;

/// The Gaussian probability density at `x` for standard deviation `sigma`.
pub fn gaussian_density(x: f64, sigma: f64) -> f64 {
    (-x * x / (2.0 * sigma * sigma)).exp() / ((2.0 * std::f64::consts::PI).sqrt() * sigma)
}

/// A normalized 1-D Gaussian kernel over offsets `-half_width..=half_width`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    half_width: usize,
    weights: Array1<f64>,
}

impl GaussianKernel {
    /// Sample and normalize the kernel. `sigma` must be positive.
    pub fn new(half_width: usize, sigma: f64) -> FilterResult<Self> {
        if sigma <= 0.0 {
            return Err(FilterError::InvalidKernel(format!(
                "sigma must be positive, got {sigma}"
            )));
        }
        let n = half_width as i64;
        let mut weights = Array1::from_iter((-n..=n).map(|x| gaussian_density(x as f64, sigma)));
        let sum: f64 = weights.sum();
        weights.mapv_inplace(|w| w / sum);
        Ok(Self {
            half_width,
            weights,
        })
    }

    /// Kernel derived from `sigma` and `truncate` the way the fast smoother
    /// sizes it: half-width = `round(truncate * sigma)`.
    pub fn truncated(sigma: f64, truncate: f64) -> FilterResult<Self> {
        if truncate < 0.0 {
            return Err(FilterError::InvalidKernel(format!(
                "truncate must be non-negative, got {truncate}"
            )));
        }
        Self::new((truncate * sigma).round() as usize, sigma)
    }

    /// Half-width of the kernel.
    pub fn half_width(&self) -> usize {
        self.half_width
    }

    /// The normalized 1-D weights, length `2 * half_width + 1`.
    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    /// The 2-D outer-product kernel used by the naive path.
    pub fn outer(&self) -> Array2<f64> {
        let len = self.weights.len();
        Array2::from_shape_fn((len, len), |(i, j)| self.weights[i] * self.weights[j])
    }
}

/// Blur one channel with the full 2-D kernel, zero-padded.
fn smooth_plane_direct(plane: &Array2<f64>, kernel: &GaussianKernel) -> Array2<f64> {
    let (h, w) = plane.dim();
    let n = kernel.half_width as i64;
    let k2 = kernel.outer();

    let mut out = Array2::zeros((h, w));
    for r in 0..h {
        for c in 0..w {
            let mut sum = 0.0;
            for i in -n..=n {
                for j in -n..=n {
                    let sr = r as i64 + i;
                    let sc = c as i64 + j;
                    if sr < 0 || sr >= h as i64 || sc < 0 || sc >= w as i64 {
                        continue;
                    }
                    sum += k2[[(i + n) as usize, (j + n) as usize]]
                        * plane[[sr as usize, sc as usize]];
                }
            }
            out[[r, c]] = sum;
        }
    }
    out
}

/// Blur one channel with two 1-D passes, zero-padded.
fn smooth_plane_separable(plane: &Array2<f64>, kernel: &GaussianKernel) -> Array2<f64> {
    let (h, w) = plane.dim();
    let n = kernel.half_width as i64;
    let weights = &kernel.weights;

    // vertical pass
    let mut mid = Array2::zeros((h, w));
    for r in 0..h {
        for c in 0..w {
            let mut sum = 0.0;
            for i in -n..=n {
                let sr = r as i64 + i;
                if sr < 0 || sr >= h as i64 {
                    continue;
                }
                sum += weights[(i + n) as usize] * plane[[sr as usize, c]];
            }
            mid[[r, c]] = sum;
        }
    }

    // horizontal pass
    let mut out = Array2::zeros((h, w));
    for r in 0..h {
        for c in 0..w {
            let mut sum = 0.0;
            for j in -n..=n {
                let sc = c as i64 + j;
                if sc < 0 || sc >= w as i64 {
                    continue;
                }
                sum += weights[(j + n) as usize] * mid[[r, sc as usize]];
            }
            out[[r, c]] = sum;
        }
    }
    out
}

/// Naive Gaussian blur: per channel, direct `(2N+1)^2` convolution.
///
/// O(H * W * (2N+1)^2) per channel; the reference implementation the fast
/// path is compared against.
pub fn smooth_naive(img: &ImageArray, kernel: &GaussianKernel) -> ImageArray {
    map_planes(img, |plane| smooth_plane_direct(plane, kernel))
}

/// Fast Gaussian blur: per channel, separable two-pass convolution.
pub fn smooth_fast(img: &ImageArray, kernel: &GaussianKernel) -> ImageArray {
    map_planes(img, |plane| smooth_plane_separable(plane, kernel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use histotex_test::{constant_gray_float, constant_rgb};
    use ndarray::array;

    #[test]
    fn test_kernel_sums_to_one() {
        for (n, sigma) in [(0, 1.0), (3, 0.5), (10, 5.0), (20, 5.0)] {
            let k = GaussianKernel::new(n, sigma).unwrap();
            let sum: f64 = k.weights().sum();
            assert!((sum - 1.0).abs() < 1e-12, "n={n} sigma={sigma} sum={sum}");
            let outer_sum: f64 = k.outer().sum();
            assert!((outer_sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_non_positive_sigma_rejected() {
        assert!(GaussianKernel::new(3, 0.0).is_err());
        assert!(GaussianKernel::new(3, -1.0).is_err());
    }

    #[test]
    fn test_truncated_half_width() {
        let k = GaussianKernel::truncated(5.0, 4.0).unwrap();
        assert_eq!(k.half_width(), 20);
    }

    #[test]
    fn test_zero_half_width_is_identity() {
        let img = ImageArray::Gray(array![[0.2, 0.8], [0.5, 0.1]]);
        let k = GaussianKernel::new(0, 5.0).unwrap();
        assert_eq!(smooth_naive(&img, &k), img);
        assert_eq!(smooth_fast(&img, &k), img);
    }

    #[test]
    fn test_constant_image_invariant_at_interior() {
        let img = constant_gray_float(12, 12, 0.6);
        let k = GaussianKernel::new(2, 1.5).unwrap();
        let ImageArray::Gray(out) = smooth_naive(&img, &k) else {
            panic!("gray in, gray out");
        };
        for r in 2..10 {
            for c in 2..10 {
                assert!((out[[r, c]] - 0.6).abs() < 1e-12);
            }
        }
        // zero padding darkens the border
        assert!(out[[0, 0]] < 0.6);
    }

    #[test]
    fn test_naive_and_fast_agree() {
        let plane = Array2::from_shape_fn((9, 7), |(r, c)| ((r * 31 + c * 17) % 11) as f64 / 10.0);
        let img = ImageArray::Gray(plane);
        let k = GaussianKernel::new(3, 1.2).unwrap();
        let ImageArray::Gray(a) = smooth_naive(&img, &k) else {
            panic!("gray in, gray out");
        };
        let ImageArray::Gray(b) = smooth_fast(&img, &k) else {
            panic!("gray in, gray out");
        };
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_color_planes_independent() {
        let img = constant_rgb(8, 8, [1.0, 0.0, 0.5]);
        let k = GaussianKernel::new(1, 1.0).unwrap();
        let ImageArray::Rgb(out) = smooth_fast(&img, &k) else {
            panic!("color in, color out");
        };
        // green stays zero everywhere, red stays 1 in the interior
        assert_eq!(out[[4, 4, 1]], 0.0);
        assert!((out[[4, 4, 0]] - 1.0).abs() < 1e-12);
    }
}
