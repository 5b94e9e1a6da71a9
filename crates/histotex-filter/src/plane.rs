//! Per-plane helpers shared by the filters.

use ndarray::{Array2, Array3, Axis};

use histotex_core::ImageArray;

/// Apply `f` to every channel plane independently, preserving layout.
pub(crate) fn map_planes<F>(img: &ImageArray, mut f: F) -> ImageArray
where
    F: FnMut(&Array2<f64>) -> Array2<f64>,
{
    match img {
        ImageArray::Gray(a) => ImageArray::Gray(f(a)),
        ImageArray::Rgb(a) => {
            let (h, w, ch) = a.dim();
            let mut out = Array3::zeros((h, w, ch));
            for k in 0..ch {
                let plane = a.index_axis(Axis(2), k).to_owned();
                let mapped = f(&plane);
                for r in 0..h {
                    for c in 0..w {
                        out[[r, c, k]] = mapped[[r, c]];
                    }
                }
            }
            ImageArray::Rgb(out)
        }
    }
}

/// Collect the channel planes of an image as owned arrays.
pub(crate) fn planes(img: &ImageArray) -> Vec<Array2<f64>> {
    match img {
        ImageArray::Gray(a) => vec![a.clone()],
        ImageArray::Rgb(a) => (0..a.dim().2)
            .map(|k| a.index_axis(Axis(2), k).to_owned())
            .collect(),
    }
}
