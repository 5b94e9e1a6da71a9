//! Image decode and encode
//!
//! Decodes any format the `image` crate recognizes into an [`ImageArray`]
//! (single-channel stays grayscale, everything else is reduced to RGB),
//! and encodes back with the format inferred from the file extension.

use std::path::Path;

use image::{DynamicImage, GrayImage, RgbImage};
use ndarray::{Array2, Array3};

use histotex_core::ImageArray;

use crate::error::{IoError, IoResult};

/// Decode an image file into a normalized-float [`ImageArray`].
pub fn read_image(path: &Path) -> IoResult<ImageArray> {
    let img = image::open(path)?;
    Ok(decode_dynamic(img))
}

fn decode_dynamic(img: DynamicImage) -> ImageArray {
    if img.color().channel_count() == 1 {
        let gray = img.into_luma8();
        let (w, h) = gray.dimensions();
        let arr = Array2::from_shape_fn((h as usize, w as usize), |(r, c)| {
            gray.get_pixel(c as u32, r as u32)[0] as f64 / 255.0
        });
        ImageArray::Gray(arr)
    } else {
        let rgb = img.into_rgb8();
        let (w, h) = rgb.dimensions();
        let arr = Array3::from_shape_fn((h as usize, w as usize, 3), |(r, c, k)| {
            rgb.get_pixel(c as u32, r as u32)[k] as f64 / 255.0
        });
        ImageArray::Rgb(arr)
    }
}

/// Encode an [`ImageArray`] to `path`, byte-coercing the float values.
///
/// The container format follows the file extension.
pub fn write_image(path: &Path, img: &ImageArray) -> IoResult<()> {
    match img {
        ImageArray::Gray(a) => {
            let bytes = histotex_core::gray_to_ubyte(a);
            let (h, w) = bytes.dim();
            let buf = GrayImage::from_raw(w as u32, h as u32, bytes.into_raw_vec_and_offset().0)
                .ok_or_else(|| IoError::Encode("gray buffer/dimension mismatch".into()))?;
            buf.save(path)?;
        }
        ImageArray::Rgb(a) => {
            let bytes = histotex_core::rgb_to_ubyte(a);
            let (h, w, _) = bytes.dim();
            let buf = RgbImage::from_raw(w as u32, h as u32, bytes.into_raw_vec_and_offset().0)
                .ok_or_else(|| IoError::Encode("rgb buffer/dimension mismatch".into()))?;
            buf.save(path)?;
        }
    }
    Ok(())
}

/// Encode an RGB byte buffer as JPEG.
pub fn write_jpeg(path: &Path, img: &RgbImage) -> IoResult<()> {
    img.save_with_format(path, image::ImageFormat::Jpeg)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_rgb_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");

        let mut arr = Array3::zeros((4, 6, 3));
        for r in 0..4 {
            for c in 0..6 {
                arr[[r, c, 0]] = 1.0;
                arr[[r, c, 2]] = 0.5;
            }
        }
        write_image(&path, &ImageArray::Rgb(arr)).unwrap();

        let back = read_image(&path).unwrap();
        assert!(back.is_color());
        assert_eq!(back.height(), 4);
        assert_eq!(back.width(), 6);
        let rgb = back.as_rgb().unwrap();
        assert!((rgb[[0, 0, 0]] - 1.0).abs() < 1e-9);
        assert!((rgb[[0, 0, 1]] - 0.0).abs() < 1e-9);
        // 128/255 after byte coercion of 0.5
        assert!((rgb[[0, 0, 2]] - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_trip_gray_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");

        let arr = Array2::from_shape_fn((3, 3), |(r, c)| (r * 3 + c) as f64 / 10.0);
        write_image(&path, &ImageArray::Gray(arr)).unwrap();

        let back = read_image(&path).unwrap();
        assert!(!back.is_color());
        assert_eq!((back.height(), back.width()), (3, 3));
    }

    #[test]
    fn test_read_missing_file() {
        assert!(read_image(Path::new("/nonexistent/img.png")).is_err());
    }
}
