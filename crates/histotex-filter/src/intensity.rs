//! Global intensity change and shift

use histotex_core::ImageArray;

/// Multiplicative factor applied by the change modes.
pub const CHANGE_SCALE: f64 = 1.25;
/// Additive offset applied by the shift modes.
pub const SHIFT_DELTA: f64 = 0.10;

/// Which intensity adjustment to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityMode {
    /// Leave the image untouched
    None,
    /// Scale by [`CHANGE_SCALE`]
    Change,
    /// Offset by [`SHIFT_DELTA`]
    Shift,
    /// Scale and offset
    ChangeShift,
}

impl IntensityMode {
    fn scale(&self) -> f64 {
        match self {
            IntensityMode::Change | IntensityMode::ChangeShift => CHANGE_SCALE,
            IntensityMode::None | IntensityMode::Shift => 1.0,
        }
    }

    fn offset(&self) -> f64 {
        match self {
            IntensityMode::Shift | IntensityMode::ChangeShift => SHIFT_DELTA,
            IntensityMode::None | IntensityMode::Change => 0.0,
        }
    }
}

/// Apply `clip(scale * v + offset, 0, 1)` to every value.
pub fn adjust_intensity(img: &ImageArray, mode: IntensityMode) -> ImageArray {
    let (s, d) = (mode.scale(), mode.offset());
    let adjust = |v: f64| (s * v + d).clamp(0.0, 1.0);
    match img {
        ImageArray::Gray(a) => ImageArray::Gray(a.mapv(adjust)),
        ImageArray::Rgb(a) => ImageArray::Rgb(a.mapv(adjust)),
    }
}
