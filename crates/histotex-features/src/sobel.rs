//! Sobel gradient-magnitude edge filter
//!
//! The byte image is normalized to [0, 1], convolved with the 3x3 Sobel
//! kernels (scaled by 1/4) under symmetric-reflect border handling, and the
//! gradient magnitude is divided by √2 so the output stays in [0, 1].

use ndarray::Array2;

use histotex_core::gray_to_float;

// row-derivative kernel / 4; the column kernel is its transpose
const SOBEL_ROW: [[f64; 3]; 3] = [
    [0.25, 0.5, 0.25],
    [0.0, 0.0, 0.0],
    [-0.25, -0.5, -0.25],
];

fn reflect(i: i64, n: usize) -> usize {
    let n = n as i64;
    let i = if i < 0 { -i - 1 } else { i };
    let i = if i >= n { 2 * n - 1 - i } else { i };
    i as usize
}

/// Compute the Sobel gradient magnitude, output in [0, 1].
pub fn sobel_magnitude(img: &Array2<u8>) -> Array2<f64> {
    let f = gray_to_float(img);
    let (h, w) = f.dim();

    let mut out = Array2::zeros((h, w));
    for r in 0..h {
        for c in 0..w {
            let mut gr = 0.0;
            let mut gc = 0.0;
            for kr in 0..3 {
                for kc in 0..3 {
                    let v = f[[
                        reflect(r as i64 + kr as i64 - 1, h),
                        reflect(c as i64 + kc as i64 - 1, w),
                    ]];
                    gr += SOBEL_ROW[kr][kc] * v;
                    gc += SOBEL_ROW[kc][kr] * v;
                }
            }
            out[[r, c]] = (gr * gr + gc * gc).sqrt() / std::f64::consts::SQRT_2;
        }
    }
    out
}
