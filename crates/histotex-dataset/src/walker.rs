//! Dataset walker
//!
//! Enumerates image files under a root directory in a deterministic,
//! repeatable order: depth-first, files within a directory in the order the
//! underlying storage exposes them (not sorted). Directories whose path
//! ends with a configured ignore suffix are pruned with their whole
//! subtree. Files are filtered by allowed file-name suffix; everything else
//! is skipped silently. Nonexistent or unreadable roots are the caller's
//! concern.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use histotex_core::{FeatureConfig, ImageArray};
use histotex_io::read_image;

use crate::error::{DatasetError, DatasetResult};

/// A directory tree of images with lazy, repeatable traversal.
#[derive(Debug, Clone)]
pub struct Dataset {
    root: PathBuf,
    ignore_dirs: Vec<String>,
    allowed_extensions: Vec<String>,
}

impl Dataset {
    /// Create a dataset over `root` with the config's traversal filters.
    pub fn new(root: impl Into<PathBuf>, config: &FeatureConfig) -> Self {
        Self {
            root: root.into(),
            ignore_dirs: config.ignore_dirs.clone(),
            allowed_extensions: config.allowed_extensions.clone(),
        }
    }

    /// The dataset root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub(crate) fn is_ignored_dir(&self, path: &Path) -> bool {
        let s = path.to_string_lossy();
        self.ignore_dirs.iter().any(|suffix| s.ends_with(suffix))
    }

    fn is_allowed_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();
        self.allowed_extensions
            .iter()
            .any(|ext| name.ends_with(ext))
    }

    /// Iterate over all image paths in traversal order.
    pub fn walk(&self) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_entry(|e| !(e.file_type().is_dir() && self.is_ignored_dir(e.path())))
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|p| self.is_allowed_file(p))
    }

    /// Number of image files (walks the whole tree).
    pub fn len(&self) -> usize {
        self.walk().count()
    }

    /// True when the dataset contains no image files.
    pub fn is_empty(&self) -> bool {
        self.walk().next().is_none()
    }

    /// Path of the `i`-th image in traversal order.
    pub fn path_at(&self, index: usize) -> Option<PathBuf> {
        self.walk().nth(index)
    }

    /// Paths for several indices in one traversal.
    ///
    /// Unsorted (and duplicate) indices are accepted; they are processed in
    /// ascending order and the result is returned in ascending index order.
    /// Indices beyond the dataset size are omitted.
    pub fn paths_at(&self, indices: &[usize]) -> Vec<(usize, PathBuf)> {
        let mut wanted: Vec<usize> = indices.to_vec();
        wanted.sort_unstable();
        wanted.dedup();

        let mut found = Vec::with_capacity(wanted.len());
        let mut next = wanted.iter().copied().peekable();
        for (j, path) in self.walk().enumerate() {
            match next.peek() {
                Some(&i) if i == j => {
                    found.push((j, path));
                    next.next();
                }
                Some(_) => {}
                None => break,
            }
        }
        found
    }

    /// Lazily decode every image, yielding `(path, image)` pairs without
    /// materializing the dataset. Decode failures propagate.
    pub fn images(&self) -> impl Iterator<Item = DatasetResult<(PathBuf, ImageArray)>> + '_ {
        self.walk().map(|p| {
            let img = read_image(&p)?;
            Ok((p, img))
        })
    }

    /// Lazy variant applying a transform chain to each decoded image.
    pub fn map_images<'a, F>(
        &'a self,
        mut transform: F,
    ) -> impl Iterator<Item = DatasetResult<ImageArray>> + 'a
    where
        F: FnMut(ImageArray) -> DatasetResult<ImageArray> + 'a,
    {
        self.images().map(move |res| {
            let (_, img) = res?;
            transform(img)
        })
    }

    /// Relative path of a walked file below the dataset root.
    pub fn relative(&self, path: &Path) -> DatasetResult<PathBuf> {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .map_err(|_| DatasetError::OutsideRoot {
                path: path.to_path_buf(),
            })
    }
}
