//! Feature-map and histogram-bundle persistence
//!
//! Feature maps are plain `.npy` 2-D arrays (u8 for LBP/Sobel, f64 for
//! GLCM/contrast). Histograms travel in compressed `.npz` bundles with the
//! member names the downstream tooling expects. GLCM tensor dimensions are
//! not stored; reconstruction needs the `FeatureConfig` at read time.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use ndarray::{Array1, Array2};
use ndarray_npy::{NpzReader, NpzWriter, ReadNpyExt, WriteNpyExt};

use crate::error::IoResult;

/// Per-image LBP histograms with their bin edges.
#[derive(Debug, Clone, PartialEq)]
pub struct LbpHistogramBundle {
    /// One row of bin counts per image
    pub histograms: Array2<f64>,
    /// One row of bin edges per image (`bins + 1` wide)
    pub bin_edges: Array2<f64>,
}

/// Dataset-wide contrast histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastHistogramBundle {
    /// Global bin counts
    pub histogram: Array1<f64>,
    /// Bin edges (`bins + 1` long)
    pub bin_edges: Array1<f64>,
}

/// Write a u8 feature map as `.npy`.
pub fn save_map_u8(path: &Path, map: &Array2<u8>) -> IoResult<()> {
    map.write_npy(BufWriter::new(File::create(path)?))?;
    Ok(())
}

/// Read a u8 feature map from `.npy`.
pub fn load_map_u8(path: &Path) -> IoResult<Array2<u8>> {
    Ok(Array2::<u8>::read_npy(BufReader::new(File::open(path)?))?)
}

/// Write an f64 feature map as `.npy`.
pub fn save_map_f64(path: &Path, map: &Array2<f64>) -> IoResult<()> {
    map.write_npy(BufWriter::new(File::create(path)?))?;
    Ok(())
}

/// Read an f64 feature map from `.npy`.
pub fn load_map_f64(path: &Path) -> IoResult<Array2<f64>> {
    Ok(Array2::<f64>::read_npy(BufReader::new(File::open(path)?))?)
}

/// Write the per-image LBP histogram bundle (compressed npz).
pub fn save_lbp_histograms(path: &Path, bundle: &LbpHistogramBundle) -> IoResult<()> {
    let mut npz = NpzWriter::new_compressed(File::create(path)?);
    // the writer appends `.npy` itself; numpy sees these as
    // `lbp_histograms` / `lbp_bin_edges`
    npz.add_array("lbp_histograms", &bundle.histograms)?;
    npz.add_array("lbp_bin_edges", &bundle.bin_edges)?;
    npz.finish()?;
    Ok(())
}

/// Read the per-image LBP histogram bundle.
pub fn load_lbp_histograms(path: &Path) -> IoResult<LbpHistogramBundle> {
    let mut npz = NpzReader::new(File::open(path)?)?;
    let histograms: Array2<f64> = npz.by_name("lbp_histograms.npy")?;
    let bin_edges: Array2<f64> = npz.by_name("lbp_bin_edges.npy")?;
    Ok(LbpHistogramBundle {
        histograms,
        bin_edges,
    })
}

/// Write the global contrast histogram bundle (compressed npz).
pub fn save_contrast_histogram(path: &Path, bundle: &ContrastHistogramBundle) -> IoResult<()> {
    let mut npz = NpzWriter::new_compressed(File::create(path)?);
    npz.add_array("contrast_histogram", &bundle.histogram)?;
    npz.add_array("contrast_bin_edges", &bundle.bin_edges)?;
    npz.finish()?;
    Ok(())
}

/// Read the global contrast histogram bundle.
pub fn load_contrast_histogram(path: &Path) -> IoResult<ContrastHistogramBundle> {
    let mut npz = NpzReader::new(File::open(path)?)?;
    let histogram: Array1<f64> = npz.by_name("contrast_histogram.npy")?;
    let bin_edges: Array1<f64> = npz.by_name("contrast_bin_edges.npy")?;
    Ok(ContrastHistogramBundle {
        histogram,
        bin_edges,
    })
}
