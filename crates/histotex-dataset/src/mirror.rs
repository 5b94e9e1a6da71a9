//! Directory-tree mirroring and transform application
//!
//! The spatial-transform tools reproduce the source directory structure
//! under a new root (structure only, or structure plus derived images),
//! preserving relative paths. Existing target directories are reused, so
//! re-running a transform overwrites its previous output.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use histotex_core::ImageArray;
use histotex_io::{read_image, write_image};

use crate::error::DatasetResult;
use crate::walker::Dataset;

impl Dataset {
    /// Reproduce the directory structure (no files) under `new_root`.
    pub fn mirror_tree(&self, new_root: &Path) -> DatasetResult<()> {
        fs::create_dir_all(new_root)?;
        for entry in WalkDir::new(self.root())
            .into_iter()
            .filter_entry(|e| !(e.file_type().is_dir() && self.is_ignored_dir(e.path())))
        {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let rel = self.relative(entry.path())?;
            fs::create_dir_all(new_root.join(rel))?;
        }
        Ok(())
    }

    /// Mirror the tree under `new_root` and write each image through
    /// `transform` to the corresponding relative path.
    ///
    /// The transformed image is clipped to [0, 1] and byte-coerced on
    /// save. `on_image` is called with each source path before it is
    /// processed (progress reporting). Returns the number of images
    /// written.
    pub fn apply_to_tree<F>(
        &self,
        new_root: &Path,
        mut transform: F,
        mut on_image: impl FnMut(&Path),
    ) -> DatasetResult<usize>
    where
        F: FnMut(&ImageArray) -> DatasetResult<ImageArray>,
    {
        self.mirror_tree(new_root)?;

        let mut written = 0usize;
        for path in self.walk().collect::<Vec<_>>() {
            on_image(&path);
            let img = read_image(&path)?;
            let out = transform(&img)?.clipped();
            let rel = self.relative(&path)?;
            write_image(&new_root.join(rel), &out)?;
            written += 1;
        }
        Ok(written)
    }
}
