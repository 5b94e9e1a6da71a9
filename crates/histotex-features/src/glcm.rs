//! Gray-level co-occurrence matrices
//!
//! For each (distance, angle) pair, counts how often gray level `i` at a
//! pixel co-occurs with gray level `j` at the offset
//! `(round(sin(a)·d), round(cos(a)·d))` rows/cols away (asymmetric, raw
//! counts). The count tensor is then min–max rescaled onto the full u32
//! range (with truncation) and divided by `u32::MAX`, giving f64 values in
//! [0, 1]. This lossy rescale is deliberate: downstream consumers depend on
//! this exact transformation, not on the recoverability of the raw counts.

use ndarray::{Array1, Array4, ArrayView1};

use histotex_core::FeatureConfig;

use crate::error::{FeatureError, FeatureResult};

/// Compute the raw co-occurrence count tensor.
///
/// Output shape is `(levels, levels, |distances|, |angles|)`.
pub fn co_occurrence(
    img: &ndarray::Array2<u8>,
    distances: &[usize],
    angles: &[f64],
    levels: usize,
) -> FeatureResult<Array4<u64>> {
    if levels == 0 || levels > 256 {
        return Err(FeatureError::InvalidParameters(format!(
            "levels must be in 1..=256, got {levels}"
        )));
    }
    if distances.is_empty() || angles.is_empty() {
        return Err(FeatureError::InvalidParameters(
            "need at least one distance and one angle".into(),
        ));
    }
    if let Some(&max) = img.iter().max()
        && (max as usize) >= levels
    {
        return Err(FeatureError::InvalidParameters(format!(
            "image has gray level {max} but only {levels} levels"
        )));
    }

    let (h, w) = img.dim();
    let mut counts = Array4::zeros((levels, levels, distances.len(), angles.len()));
    for (di, &d) in distances.iter().enumerate() {
        for (ai, &a) in angles.iter().enumerate() {
            let row_off = (a.sin() * d as f64).round() as i64;
            let col_off = (a.cos() * d as f64).round() as i64;
            for r in 0..h {
                let r2 = r as i64 + row_off;
                if r2 < 0 || r2 >= h as i64 {
                    continue;
                }
                for c in 0..w {
                    let c2 = c as i64 + col_off;
                    if c2 < 0 || c2 >= w as i64 {
                        continue;
                    }
                    let i = img[[r, c]] as usize;
                    let j = img[[r2 as usize, c2 as usize]] as usize;
                    counts[[i, j, di, ai]] += 1;
                }
            }
        }
    }
    Ok(counts)
}

/// Min–max rescale the count tensor onto the u32 range, then normalize to
/// f64 in [0, 1]. A tensor with all-equal values rescales to all zeros.
pub fn rescale_normalize(counts: &Array4<u64>) -> Array4<f64> {
    let min = counts.iter().copied().min().unwrap_or(0);
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == min {
        return Array4::zeros(counts.dim());
    }
    let span = (max - min) as f64;
    let full = u32::MAX as f64;
    counts.mapv(|v| {
        // truncate to an integer level first, as the byte-depth rescale does
        let q = ((v - min) as f64 / span * full) as u64;
        q as f64 / full
    })
}

/// Reshape a stored flat GLCM row back into its 4-D tensor.
///
/// The dimensions are not stored in the file; they come from the config.
pub fn tensor_from_row(row: ArrayView1<f64>, config: &FeatureConfig) -> FeatureResult<Array4<f64>> {
    let expected = config.glcm_row_len();
    if row.len() != expected {
        return Err(histotex_core::Error::LengthMismatch {
            expected,
            actual: row.len(),
        }
        .into());
    }
    let shape = (
        config.levels(),
        config.levels(),
        config.distances.len(),
        config.angles.len(),
    );
    let vec = row.iter().copied().collect::<Vec<_>>();
    Array4::from_shape_vec(shape, vec).map_err(|_| {
        histotex_core::Error::LengthMismatch {
            expected,
            actual: row.len(),
        }
        .into()
    })
}

/// Flatten a 4-D GLCM tensor to its stored row form (row-major).
pub fn row_from_tensor(tensor: &Array4<f64>) -> Array1<f64> {
    Array1::from_iter(tensor.iter().copied())
}
