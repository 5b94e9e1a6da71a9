//! Histogram bar charts
//!
//! Bars are drawn with plotters primitives into an in-memory RGB buffer,
//! which keeps the crate free of font loading; axis labels are omitted.

use image::RgbImage;
use ndarray::Array1;
use plotters::prelude::*;

use histotex_core::Histogram;

use crate::error::{PlotError, PlotResult};

/// Default chart width in pixels.
pub const CHART_WIDTH: u32 = 480;
/// Default chart height in pixels.
pub const CHART_HEIGHT: u32 = 360;

const MARGIN: i32 = 16;
const BAR_COLOR: RGBColor = RGBColor(66, 104, 168);
const AXIS_COLOR: RGBColor = RGBColor(40, 40, 40);

/// Render a frequency histogram as a bar chart of the given size.
pub fn histogram_chart(hist: &Histogram, width: u32, height: u32) -> PlotResult<RgbImage> {
    if width <= 2 * MARGIN as u32 || height <= 2 * MARGIN as u32 {
        return Err(PlotError::InvalidInput(format!(
            "chart size {width}x{height} leaves no plot area"
        )));
    }
    bar_chart(&hist.counts, width, height)
}

/// Render raw per-bin counts as a bar chart.
pub fn bar_chart(counts: &Array1<f64>, width: u32, height: u32) -> PlotResult<RgbImage> {
    let bins = counts.len();
    if bins == 0 {
        return Err(PlotError::InvalidInput("no bins to chart".into()));
    }
    let max = counts.iter().cloned().fold(0.0_f64, f64::max);

    let mut buf = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let left = MARGIN;
        let right = width as i32 - MARGIN;
        let top = MARGIN;
        let bottom = height as i32 - MARGIN;
        let plot_w = (right - left) as f64;
        let plot_h = (bottom - top) as f64;

        for (i, &count) in counts.iter().enumerate() {
            if count <= 0.0 || max <= 0.0 {
                continue;
            }
            let x0 = left + (i as f64 / bins as f64 * plot_w) as i32;
            let x1 = left + ((i + 1) as f64 / bins as f64 * plot_w) as i32;
            let bar_h = (count / max * plot_h).round() as i32;
            root.draw(&Rectangle::new(
                [(x0, bottom - bar_h), (x1.max(x0 + 1), bottom)],
                BAR_COLOR.filled(),
            ))
            .map_err(draw_err)?;
        }

        // baseline
        root.draw(&PathElement::new(
            vec![(left, bottom), (right, bottom)],
            &AXIS_COLOR,
        ))
        .map_err(draw_err)?;

        root.present().map_err(draw_err)?;
    }

    RgbImage::from_raw(width, height, buf)
        .ok_or_else(|| PlotError::Buffer("chart buffer/dimension mismatch".into()))
}

fn draw_err<E: std::error::Error>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use histotex_core::histogram;
    use image::Rgb;

    #[test]
    fn test_chart_dimensions() {
        let h = histogram(&[0.1, 0.2, 0.8], 4, Some((0.0, 1.0))).unwrap();
        let img = histogram_chart(&h, CHART_WIDTH, CHART_HEIGHT).unwrap();
        assert_eq!(img.dimensions(), (CHART_WIDTH, CHART_HEIGHT));
    }

    #[test]
    fn test_chart_draws_bars_on_white() {
        let counts = Array1::from(vec![1.0, 3.0, 2.0]);
        let img = bar_chart(&counts, 120, 90).unwrap();
        assert_eq!(*img.get_pixel(0, 0), Rgb([255, 255, 255]));
        let has_bar = img
            .pixels()
            .any(|p| *p == Rgb([BAR_COLOR.0, BAR_COLOR.1, BAR_COLOR.2]));
        assert!(has_bar);
    }

    #[test]
    fn test_empty_counts_rejected() {
        let counts = Array1::from(vec![]);
        assert!(bar_chart(&counts, 120, 90).is_err());
    }

    #[test]
    fn test_all_zero_counts_draws_no_bars() {
        let counts = Array1::from(vec![0.0, 0.0]);
        let img = bar_chart(&counts, 120, 90).unwrap();
        let has_bar = img
            .pixels()
            .any(|p| *p == Rgb([BAR_COLOR.0, BAR_COLOR.1, BAR_COLOR.2]));
        assert!(!has_bar);
    }

    #[test]
    fn test_tiny_chart_rejected() {
        let h = histogram(&[0.5], 2, Some((0.0, 1.0))).unwrap();
        assert!(histogram_chart(&h, 10, 10).is_err());
    }
}
