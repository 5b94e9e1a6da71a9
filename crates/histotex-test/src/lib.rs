//! histotex-test - Shared test fixtures
//!
//! Synthetic image builders and temporary on-disk dataset trees used from
//! the integration tests of the other workspace crates.
//!
//! # Usage
//!
//! ```ignore
//! use histotex_test::TempDataset;
//!
//! let ds = TempDataset::new().unwrap();
//! ds.add_solid_png("treino/a.png", [200, 40, 40], 16, 12).unwrap();
//! ds.add_text_file("treino/notes.txt").unwrap();
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use ndarray::{Array2, Array3};
use tempfile::TempDir;
use thiserror::Error;

use histotex_core::ImageArray;

/// Errors while building fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encode error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for fixture builders
pub type TestResult<T> = Result<T, TestError>;

/// A constant-intensity byte image.
pub fn constant_gray(height: usize, width: usize, value: u8) -> Array2<u8> {
    Array2::from_elem((height, width), value)
}

/// A horizontal byte ramp: pixel value is the column index modulo 256.
pub fn gradient_gray(height: usize, width: usize) -> Array2<u8> {
    Array2::from_shape_fn((height, width), |(_, c)| (c % 256) as u8)
}

/// A constant-color normalized-float image.
pub fn constant_rgb(height: usize, width: usize, rgb: [f64; 3]) -> ImageArray {
    ImageArray::Rgb(Array3::from_shape_fn((height, width, 3), |(_, _, k)| {
        rgb[k]
    }))
}

/// A constant-intensity normalized-float grayscale image.
pub fn constant_gray_float(height: usize, width: usize, value: f64) -> ImageArray {
    ImageArray::Gray(Array2::from_elem((height, width), value))
}

/// A temporary directory tree of synthetic images.
///
/// Relative paths use `/` separators; intermediate directories are
/// created on demand. The tree is removed when the value is dropped.
pub struct TempDataset {
    dir: TempDir,
}

impl TempDataset {
    /// Create an empty temporary dataset root.
    pub fn new() -> TestResult<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// The dataset root path.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file or directory inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Create an (empty) subdirectory.
    pub fn add_dir(&self, rel: &str) -> TestResult<PathBuf> {
        let path = self.path(rel);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Write a solid-color PNG at `rel`.
    pub fn add_solid_png(
        &self,
        rel: &str,
        rgb: [u8; 3],
        width: u32,
        height: u32,
    ) -> TestResult<PathBuf> {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let img = RgbImage::from_pixel(width, height, Rgb(rgb));
        img.save(&path)?;
        Ok(path)
    }

    /// Write a two-tone PNG: left half `left`, right half `right`.
    pub fn add_split_png(
        &self,
        rel: &str,
        left: [u8; 3],
        right: [u8; 3],
        width: u32,
        height: u32,
    ) -> TestResult<PathBuf> {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let img = RgbImage::from_fn(width, height, |x, _| {
            if x < width / 2 { Rgb(left) } else { Rgb(right) }
        });
        img.save(&path)?;
        Ok(path)
    }

    /// Write a small non-image file (disallowed extension).
    pub fn add_text_file(&self, rel: &str) -> TestResult<PathBuf> {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, b"not an image")?;
        Ok(path)
    }
}
