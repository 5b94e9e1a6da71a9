//! Local binary patterns
//!
//! The "default" LBP code: `P` samples on a ring of radius `R` around each
//! pixel, sample `p` at relative offset `(-R sin(2πp/P), R cos(2πp/P))`,
//! bilinear-interpolated with zero outside the image. Bit `p` is set when
//! the sample is >= the center value; the code is `Σ bit·2^p`. Codes are
//! truncated to unsigned bytes (for P = 8 they fit exactly).

use ndarray::Array2;

/// Bilinear sample of a byte image at fractional coordinates, zero padded.
fn sample(img: &Array2<u8>, r: f64, c: f64) -> f64 {
    let (h, w) = img.dim();
    let get = |ri: i64, ci: i64| -> f64 {
        if ri < 0 || ci < 0 || ri >= h as i64 || ci >= w as i64 {
            0.0
        } else {
            img[[ri as usize, ci as usize]] as f64
        }
    };

    let r0 = r.floor();
    let c0 = c.floor();
    let fr = r - r0;
    let fc = c - c0;
    let r0 = r0 as i64;
    let c0 = c0 as i64;

    let top = get(r0, c0) * (1.0 - fc) + get(r0, c0 + 1) * fc;
    let bot = get(r0 + 1, c0) * (1.0 - fc) + get(r0 + 1, c0 + 1) * fc;
    top * (1.0 - fr) + bot * fr
}

/// Compute the per-pixel LBP code image.
///
/// Output has the same shape as the input; each pixel holds the code of
/// its neighborhood, truncated to a byte.
pub fn local_binary_pattern(img: &Array2<u8>, neighbors: u32, radius: f64) -> Array2<u8> {
    let (h, w) = img.dim();
    let p = neighbors as usize;

    // ring offsets, fixed per image
    let offsets: Vec<(f64, f64)> = (0..p)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / p as f64;
            (-radius * theta.sin(), radius * theta.cos())
        })
        .collect();

    let mut out = Array2::zeros((h, w));
    for r in 0..h {
        for c in 0..w {
            let center = img[[r, c]] as f64;
            let mut code: u64 = 0;
            for (i, &(dr, dc)) in offsets.iter().enumerate() {
                if sample(img, r as f64 + dr, c as f64 + dc) >= center {
                    code |= 1 << i;
                }
            }
            out[[r, c]] = code as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use histotex_test::{constant_gray, gradient_gray};

    #[test]
    fn test_constant_image_interior_all_bits_set() {
        // every neighbor equals the center, so every comparison holds
        let img = constant_gray(8, 8, 100);
        let lbp = local_binary_pattern(&img, 8, 1.0);
        for r in 2..6 {
            for c in 2..6 {
                assert_eq!(lbp[[r, c]], 255, "at ({r},{c})");
            }
        }
    }

    #[test]
    fn test_zero_image_is_all_255() {
        // zero padding equals the zero center, so border pixels too
        let img = constant_gray(4, 4, 0);
        let lbp = local_binary_pattern(&img, 8, 1.0);
        assert!(lbp.iter().all(|&v| v == 255));
    }

    #[test]
    fn test_bright_center_gets_no_bits() {
        let mut img = constant_gray(5, 5, 10);
        img[[2, 2]] = 200;
        let lbp = local_binary_pattern(&img, 8, 1.0);
        assert_eq!(lbp[[2, 2]], 0);
    }

    #[test]
    fn test_horizontal_ramp_sets_east_not_west() {
        // on a left-to-right ramp the east sample exceeds the center and
        // the west sample falls below it, so bit 0 is set and bit 4 clear
        let img = gradient_gray(4, 16);
        let lbp = local_binary_pattern(&img, 8, 1.0);
        for r in 1..3 {
            for c in 1..15 {
                let code = lbp[[r, c]];
                assert_eq!(code & 0b0000_0001, 1, "east bit at ({r},{c})");
                assert_eq!(code & 0b0001_0000, 0, "west bit at ({r},{c})");
            }
        }
    }

    #[test]
    fn test_output_shape_matches_input() {
        let img = constant_gray(7, 11, 42);
        let lbp = local_binary_pattern(&img, 8, 1.0);
        assert_eq!(lbp.dim(), (7, 11));
    }
}
