//! Gamma correction
//!
//! Element-wise `clip(gain * v^gamma, 0, 1)` on normalized-float input.

use histotex_core::ImageArray;

use crate::error::{FilterError, FilterResult};

/// Apply gamma correction to every channel.
///
/// `gamma = 1`, `gain = 1` is the identity on in-range input. A negative
/// gamma or gain is rejected.
pub fn adjust_gamma(img: &ImageArray, gamma: f64, gain: f64) -> FilterResult<ImageArray> {
    if gamma < 0.0 || gain < 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "gamma and gain must be non-negative, got gamma={gamma} gain={gain}"
        )));
    }
    let adjust = |v: f64| (gain * v.powf(gamma)).clamp(0.0, 1.0);
    Ok(match img {
        ImageArray::Gray(a) => ImageArray::Gray(a.mapv(adjust)),
        ImageArray::Rgb(a) => ImageArray::Rgb(a.mapv(adjust)),
    })
}
