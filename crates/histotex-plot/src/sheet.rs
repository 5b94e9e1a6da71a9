//! Tile assembly
//!
//! Comparison sheets are grids of tiles separated by a uniform gutter on a
//! white background. Tiles keep their own sizes; rows are as tall as their
//! tallest tile.

use image::{Rgb, RgbImage};
use ndarray::Array2;

use histotex_core::ImageArray;

use crate::error::{PlotError, PlotResult};

/// Gutter between tiles, in pixels.
pub const GUTTER: u32 = 8;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Convert a byte grayscale array to an RGB tile.
pub fn gray_tile(bytes: &Array2<u8>) -> RgbImage {
    let (h, w) = bytes.dim();
    RgbImage::from_fn(w as u32, h as u32, |x, y| {
        let v = bytes[[y as usize, x as usize]];
        Rgb([v, v, v])
    })
}

/// Convert a normalized-float image to an RGB tile.
pub fn image_tile(img: &ImageArray) -> RgbImage {
    match img {
        ImageArray::Gray(a) => gray_tile(&histotex_core::gray_to_ubyte(a)),
        ImageArray::Rgb(a) => {
            let bytes = histotex_core::rgb_to_ubyte(a);
            let (h, w, _) = bytes.dim();
            RgbImage::from_fn(w as u32, h as u32, |x, y| {
                let (r, c) = (y as usize, x as usize);
                Rgb([bytes[[r, c, 0]], bytes[[r, c, 1]], bytes[[r, c, 2]]])
            })
        }
    }
}

/// Lay tiles out as a grid, one inner `Vec` per sheet row.
pub fn tile_grid(rows: &[Vec<RgbImage>]) -> PlotResult<RgbImage> {
    if rows.iter().all(|r| r.is_empty()) {
        return Err(PlotError::InvalidInput("no tiles to lay out".into()));
    }

    let row_heights: Vec<u32> = rows
        .iter()
        .map(|r| r.iter().map(|t| t.height()).max().unwrap_or(0))
        .collect();
    let row_widths: Vec<u32> = rows
        .iter()
        .map(|r| r.iter().map(|t| t.width() + GUTTER).sum::<u32>() + GUTTER)
        .collect();

    let width = row_widths.iter().copied().max().unwrap_or(0);
    let height = row_heights.iter().map(|h| h + GUTTER).sum::<u32>() + GUTTER;

    let mut sheet = RgbImage::from_pixel(width, height, BACKGROUND);
    let mut y = GUTTER;
    for (row, &row_h) in rows.iter().zip(&row_heights) {
        let mut x = GUTTER;
        for tile in row {
            blit(&mut sheet, tile, x, y);
            x += tile.width() + GUTTER;
        }
        y += row_h + GUTTER;
    }
    Ok(sheet)
}

/// Shrink a tile so its longer side is at most `max_side`; smaller tiles
/// pass through unchanged.
pub fn thumbnail(img: &RgbImage, max_side: u32) -> RgbImage {
    let (w, h) = img.dimensions();
    let long = w.max(h);
    if long <= max_side || max_side == 0 {
        return img.clone();
    }
    let scale = max_side as f64 / long as f64;
    let nw = ((w as f64 * scale).round() as u32).max(1);
    let nh = ((h as f64 * scale).round() as u32).max(1);
    image::imageops::resize(img, nw, nh, image::imageops::FilterType::Triangle)
}

fn blit(dst: &mut RgbImage, src: &RgbImage, x0: u32, y0: u32) {
    for (x, y, px) in src.enumerate_pixels() {
        dst.put_pixel(x0 + x, y0 + y, *px);
    }
}
