//! histotex CLI - Texture feature extraction for image datasets

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use histotex_core::{histogram, FeatureConfig, FeatureKind, Histogram, SpatialConfig};
use histotex_dataset::{Dataset, DatasetError};
use histotex_features::{extract, preprocess};
use histotex_filter::{smooth_fast, smooth_naive, GaussianKernel, SpatialTransform};
use histotex_io::{
    contrast_histogram_bundle, feature_figure_path, feature_map_path, lbp_histogram_bundle,
    load_contrast_histogram, load_lbp_histograms, load_map_f64, load_map_u8, read_image,
    save_contrast_histogram, save_lbp_histograms, save_map_f64, save_map_u8, transform_root,
    write_image, write_jpeg, CONTRAST_HISTOGRAM_FILE, LBP_HISTOGRAMS_FILE,
};
use histotex_plot::{
    byte_feature_tile, comparison_sheet, contrast_histogram_figure, glcm_slice_tile, gray_tile,
    image_tile, lbp_histogram_sheet, thumbnail, FeatureTiles,
};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "histotex")]
#[command(author, version, about = "Texture feature extraction for image datasets", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract all feature maps from a dataset and write them as .npy
    Extract {
        /// Dataset root directory
        dataset: PathBuf,
        /// Process at most this many images
        #[arg(long)]
        cutoff: Option<usize>,
    },
    /// Build histogram bundles from stored feature maps
    Histograms {
        /// LBP feature-map files (.npy, u8)
        #[arg(long, num_args = 1..)]
        lbp: Vec<PathBuf>,
        /// Contrast feature-map files (.npy, f64)
        #[arg(long, num_args = 1..)]
        contrast: Vec<PathBuf>,
    },
    /// Render comparison sheets and histogram figures for a dataset
    Plot {
        /// Dataset root directory (must have been extracted already)
        dataset: PathBuf,
        /// Number of randomly sampled images per sheet
        #[arg(short, long, default_value = "3")]
        samples: usize,
    },
    /// Write transformed copies of a dataset into mirrored trees
    Transform {
        /// Dataset root directory
        dataset: PathBuf,
        /// Fast Gaussian blur -> <dataset>_gaussian
        #[arg(long)]
        gaussian: bool,
        /// Gamma variants -> <dataset>_gamma1..N
        #[arg(long)]
        gamma: bool,
        /// Laplacian -> <dataset>_laplace
        #[arg(long)]
        laplace: bool,
        /// Histogram equalization -> <dataset>_hist
        #[arg(long)]
        hist: bool,
    },
    /// Run the naive and fast Gaussian on one image and compare timings
    CompareGaussian {
        /// Input image file
        image: PathBuf,
        /// Half-width of the naive kernel
        #[arg(short = 'n', long, default_value = "10")]
        half_width: usize,
        /// Standard deviation of both kernels
        #[arg(short, long, default_value = "5.0")]
        sigma: f64,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn progress(len: usize, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap()
            .progress_chars("=> "),
    );
    pb.set_message(msg.to_string());
    pb
}

fn done(name: &str, path: &Path, elapsed: std::time::Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

/// Longest tile side on comparison sheets.
const TILE_SIDE: u32 = 384;

fn lbp_code_histogram(row: ndarray::ArrayView1<u8>) -> Result<Histogram> {
    let values: Vec<f64> = row.iter().map(|&v| v as f64).collect();
    histogram(&values, histotex_io::LBP_BINS, None).context("histogramming LBP codes")
}

fn stack_u8_maps(paths: &[PathBuf]) -> Result<ndarray::Array2<u8>> {
    let maps = paths
        .iter()
        .map(|p| load_map_u8(p).with_context(|| format!("reading {}", p.display())))
        .collect::<Result<Vec<_>>>()?;
    let views: Vec<_> = maps.iter().map(|m| m.view()).collect();
    ndarray::concatenate(ndarray::Axis(0), &views).context("stacking LBP maps")
}

fn stack_f64_maps(paths: &[PathBuf]) -> Result<ndarray::Array2<f64>> {
    let maps = paths
        .iter()
        .map(|p| load_map_f64(p).with_context(|| format!("reading {}", p.display())))
        .collect::<Result<Vec<_>>>()?;
    let views: Vec<_> = maps.iter().map(|m| m.view()).collect();
    ndarray::concatenate(ndarray::Axis(0), &views).context("stacking contrast maps")
}

fn sample_indices(len: usize, samples: usize) -> Vec<usize> {
    use rand::Rng;
    let mut rng = rand::rng();
    let wanted = samples.min(len);
    let mut picked = Vec::with_capacity(wanted);
    while picked.len() < wanted {
        let i = rng.random_range(0..len);
        if !picked.contains(&i) {
            picked.push(i);
        }
    }
    picked
}

// ─── Subcommand bodies ──────────────────────────────────────────────────

fn run_extract(dataset: &Path, cutoff: Option<usize>) -> Result<()> {
    let config = FeatureConfig {
        cutoff,
        ..FeatureConfig::default()
    };
    let ds = Dataset::new(dataset, &config);
    let total = config.bounded_len(ds.len());
    info!("Extracting features from {} images", total);

    let start = Instant::now();
    let pb = progress(total, "Extracting");
    let maps = extract(&ds, &config, |_, _| pb.inc(1))
        .with_context(|| format!("extracting features from {}", dataset.display()))?;
    pb.finish_and_clear();

    let lbp_path = feature_map_path(dataset, FeatureKind::Lbp);
    save_map_u8(&lbp_path, &maps.lbp).context("writing LBP map")?;
    let glcm_path = feature_map_path(dataset, FeatureKind::Glcm);
    save_map_f64(&glcm_path, &maps.glcm).context("writing GLCM map")?;
    let sobel_path = feature_map_path(dataset, FeatureKind::Sobel);
    save_map_u8(&sobel_path, &maps.sobel).context("writing Sobel map")?;
    let contrast_path = feature_map_path(dataset, FeatureKind::Contrast);
    save_map_f64(&contrast_path, &maps.contrast).context("writing contrast map")?;

    for kind in FeatureKind::ALL {
        println!("  wrote {}", feature_map_path(dataset, kind).display());
    }
    println!("  Processing time: {:.2?}", start.elapsed());
    Ok(())
}

fn run_histograms(lbp: &[PathBuf], contrast: &[PathBuf]) -> Result<()> {
    if lbp.is_empty() && contrast.is_empty() {
        anyhow::bail!("nothing to do: pass --lbp and/or --contrast map files");
    }

    if !lbp.is_empty() {
        let start = Instant::now();
        let map = stack_u8_maps(lbp)?;
        info!("Histogramming {} LBP rows", map.nrows());
        let bundle = lbp_histogram_bundle(&map).context("building LBP histograms")?;
        let path = PathBuf::from(LBP_HISTOGRAMS_FILE);
        save_lbp_histograms(&path, &bundle).context("writing LBP histogram bundle")?;
        done("LBP histograms", &path, start.elapsed());
    }

    if !contrast.is_empty() {
        let start = Instant::now();
        let map = stack_f64_maps(contrast)?;
        info!("Histogramming {} contrast rows", map.nrows());
        let bundle = contrast_histogram_bundle(&map).context("building contrast histogram")?;
        let path = PathBuf::from(CONTRAST_HISTOGRAM_FILE);
        save_contrast_histogram(&path, &bundle).context("writing contrast histogram bundle")?;
        done("Contrast histogram", &path, start.elapsed());
    }
    Ok(())
}

fn run_plot(dataset: &Path, samples: usize) -> Result<()> {
    let config = FeatureConfig::default();
    let ds = Dataset::new(dataset, &config);

    let lbp = load_map_u8(&feature_map_path(dataset, FeatureKind::Lbp))
        .context("reading LBP map (run `histotex extract` first)")?;
    let glcm = load_map_f64(&feature_map_path(dataset, FeatureKind::Glcm))
        .context("reading GLCM map")?;
    let sobel = load_map_u8(&feature_map_path(dataset, FeatureKind::Sobel))
        .context("reading Sobel map")?;
    let contrast = load_map_f64(&feature_map_path(dataset, FeatureKind::Contrast))
        .context("reading contrast map")?;

    let rows = lbp.nrows();
    if rows == 0 {
        anyhow::bail!("feature maps for {} are empty", dataset.display());
    }

    let start = Instant::now();
    let indices = sample_indices(rows, samples);
    let picked = ds.paths_at(&indices);
    if picked.len() != indices.len() {
        anyhow::bail!(
            "dataset at {} no longer matches the stored maps ({} rows)",
            dataset.display(),
            rows
        );
    }
    info!("Plotting rows {:?}", indices);

    // reuse the stored bundles from `histotex histograms` when present
    let lbp_bundle = if Path::new(LBP_HISTOGRAMS_FILE).exists() {
        Some(
            load_lbp_histograms(Path::new(LBP_HISTOGRAMS_FILE))
                .context("reading LBP histogram bundle")?,
        )
    } else {
        None
    };

    let mut lbp_entries = Vec::new();
    let mut glcm_entries = Vec::new();
    let mut sobel_entries = Vec::new();
    let mut lbp_hist_entries = Vec::new();
    for (i, path) in &picked {
        let img = read_image(path).with_context(|| format!("reading {}", path.display()))?;
        let original = thumbnail(&image_tile(&img), TILE_SIDE);
        let gray = thumbnail(&gray_tile(&preprocess(&img, &config)?), TILE_SIDE);

        let lbp_img = thumbnail(&byte_feature_tile(lbp.row(*i), &config)?, TILE_SIDE);
        lbp_entries.push(FeatureTiles {
            original: original.clone(),
            gray: gray.clone(),
            feature: lbp_img.clone(),
        });
        glcm_entries.push(FeatureTiles {
            original: original.clone(),
            gray: gray.clone(),
            feature: thumbnail(&glcm_slice_tile(glcm.row(*i), &config, 0, 0)?, TILE_SIDE),
        });
        sobel_entries.push(FeatureTiles {
            original: original.clone(),
            gray,
            feature: thumbnail(&byte_feature_tile(sobel.row(*i), &config)?, TILE_SIDE),
        });
        let hist = match &lbp_bundle {
            Some(bundle) if *i < bundle.histograms.nrows() => Histogram {
                counts: bundle.histograms.row(*i).to_owned(),
                edges: bundle.bin_edges.row(*i).to_owned(),
            },
            _ => lbp_code_histogram(lbp.row(*i))?,
        };
        lbp_hist_entries.push((original, lbp_img, hist));
    }

    let sheets = [
        (FeatureKind::Lbp, comparison_sheet(&lbp_entries)?),
        (FeatureKind::Glcm, comparison_sheet(&glcm_entries)?),
        (FeatureKind::Sobel, comparison_sheet(&sobel_entries)?),
    ];
    for (kind, sheet) in &sheets {
        let path = feature_figure_path(dataset, *kind);
        write_jpeg(&path, sheet).with_context(|| format!("writing {}", path.display()))?;
        println!("  wrote {}", path.display());
    }

    let lbp_sheet = lbp_histogram_sheet(&lbp_hist_entries)?;
    write_jpeg(Path::new("LBP_histograms.jpeg"), &lbp_sheet)
        .context("writing LBP histogram sheet")?;
    println!("  wrote LBP_histograms.jpeg");

    let bundle = if Path::new(CONTRAST_HISTOGRAM_FILE).exists() {
        load_contrast_histogram(Path::new(CONTRAST_HISTOGRAM_FILE))
            .context("reading contrast histogram bundle")?
    } else {
        contrast_histogram_bundle(&contrast)?
    };
    let figure = contrast_histogram_figure(&Histogram {
        counts: bundle.histogram,
        edges: bundle.bin_edges,
    })?;
    write_jpeg(Path::new("contrast_histogram.jpeg"), &figure)
        .context("writing contrast histogram figure")?;
    println!("  wrote contrast_histogram.jpeg");
    println!("  Processing time: {:.2?}", start.elapsed());
    Ok(())
}

fn run_transform(
    dataset: &Path,
    gaussian: bool,
    gamma: bool,
    laplace: bool,
    hist: bool,
) -> Result<()> {
    let config = FeatureConfig::default();
    let spatial = SpatialConfig::default();
    let ds = Dataset::new(dataset, &config);
    let transforms = selected_transforms(&spatial, gaussian, gamma, laplace, hist)?;

    let total = ds.len();
    for t in transforms {
        let new_root = transform_root(dataset, &t.dir_suffix());
        info!("Transforming {} images into {}", total, new_root.display());

        let start = Instant::now();
        let pb = progress(total, &t.dir_suffix());
        let written = ds.apply_to_tree(
            &new_root,
            |img| {
                t.apply(img, &spatial)
                    .map_err(|e| DatasetError::Transform(e.to_string()))
            },
            |_| pb.inc(1),
        )?;
        pb.finish_and_clear();

        println!("  {} images written", written);
        done("Transformed tree", &new_root, start.elapsed());
    }
    Ok(())
}

/// With no flags every transform runs, so a plain `histotex transform <dir>`
/// produces the full set of derived trees in one pass.
fn selected_transforms(
    spatial: &SpatialConfig,
    gaussian: bool,
    gamma: bool,
    laplace: bool,
    hist: bool,
) -> Result<Vec<SpatialTransform>> {
    let mut transforms = Vec::new();
    let all = !(gaussian || gamma || laplace || hist);
    if gaussian || all {
        transforms.push(SpatialTransform::Gaussian);
    }
    if gamma || all {
        transforms.extend(SpatialTransform::gamma_variants(spatial)?);
    }
    if laplace || all {
        transforms.push(SpatialTransform::Laplace);
    }
    if hist || all {
        transforms.push(SpatialTransform::HistEqualize);
    }
    Ok(transforms)
}

fn run_compare_gaussian(image_path: &Path, half_width: usize, sigma: f64) -> Result<()> {
    let img =
        read_image(image_path).with_context(|| format!("reading {}", image_path.display()))?;
    info!("Input: {} x {}", img.width(), img.height());

    let spatial = SpatialConfig::default();
    let naive_kernel = GaussianKernel::new(half_width, sigma)?;
    let fast_kernel = GaussianKernel::truncated(sigma, spatial.truncate)?;

    let start = Instant::now();
    let naive_out = smooth_naive(&img, &naive_kernel);
    let naive_elapsed = start.elapsed();

    let start = Instant::now();
    let fast_out = smooth_fast(&img, &fast_kernel);
    let fast_elapsed = start.elapsed();

    let naive_path = sibling(image_path, "naive");
    write_image(&naive_path, &naive_out).context("writing naive output")?;
    let fast_path = sibling(image_path, "fast");
    write_image(&fast_path, &fast_out).context("writing fast output")?;

    println!(
        "Naive (half-width {}, sigma {}): {:.2?} -> {}",
        half_width,
        sigma,
        naive_elapsed,
        naive_path.display()
    );
    println!(
        "Fast  (half-width {}, sigma {}): {:.2?} -> {}",
        fast_kernel.half_width(),
        sigma,
        fast_elapsed,
        fast_path.display()
    );
    Ok(())
}

/// `foo.png` -> `foo_<tag>.png` next to the original.
fn sibling(path: &Path, tag: &str) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());
    let name = match ext {
        Some(ext) => format!("{stem}_{tag}.{ext}"),
        None => format!("{stem}_{tag}"),
    };
    path.with_file_name(name)
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Extract { dataset, cutoff } => run_extract(&dataset, cutoff),
        Commands::Histograms { lbp, contrast } => run_histograms(&lbp, &contrast),
        Commands::Plot { dataset, samples } => run_plot(&dataset, samples),
        Commands::Transform {
            dataset,
            gaussian,
            gamma,
            laplace,
            hist,
        } => run_transform(&dataset, gaussian, gamma, laplace, hist),
        Commands::CompareGaussian {
            image,
            half_width,
            sigma,
        } => run_compare_gaussian(&image, half_width, sigma),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flagless_transform_selects_everything() {
        let cfg = SpatialConfig::default();
        let suffixes: Vec<String> = selected_transforms(&cfg, false, false, false, false)
            .unwrap()
            .iter()
            .map(|t| t.dir_suffix())
            .collect();
        assert_eq!(
            suffixes,
            ["gaussian", "gamma1", "gamma2", "gamma3", "laplace", "hist"]
        );
    }

    #[test]
    fn test_single_flag_selects_only_its_transform() {
        let cfg = SpatialConfig::default();
        let suffixes: Vec<String> = selected_transforms(&cfg, false, false, true, false)
            .unwrap()
            .iter()
            .map(|t| t.dir_suffix())
            .collect();
        assert_eq!(suffixes, ["laplace"]);

        let suffixes: Vec<String> = selected_transforms(&cfg, false, true, false, false)
            .unwrap()
            .iter()
            .map(|t| t.dir_suffix())
            .collect();
        assert_eq!(suffixes, ["gamma1", "gamma2", "gamma3"]);
    }
}
