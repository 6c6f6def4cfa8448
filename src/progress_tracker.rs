use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use walkdir::WalkDir;

use crate::errors::{OutlineError, Result};

/// Candidate list from one scan of the target folder, plus the console.
///
/// The folder is read once; outlines written while the batch runs are not
/// picked up again.
pub struct ProgressTracker {
    progress_bar: ProgressBar,
    image_paths: Vec<PathBuf>,
}

impl ProgressTracker {
    pub fn scan(dir: &Path) -> Result<Self> {
        Ok(Self::for_paths(scan_png_files(dir)?))
    }

    pub fn for_paths(image_paths: Vec<PathBuf>) -> Self {
        let progress_bar = ProgressBar::new(image_paths.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        {
            progress_bar.set_style(style.progress_chars("#>-"));
        }

        Self {
            progress_bar,
            image_paths,
        }
    }

    pub fn image_paths(&self) -> &[PathBuf] {
        &self.image_paths
    }

    /// Prints a console line above the bar.
    pub fn report(&self, message: impl AsRef<str>) {
        self.progress_bar.suspend(|| println!("{}", message.as_ref()));
    }

    pub fn advance(&self) {
        self.progress_bar.inc(1);
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

/// Non-recursive `*.png` listing of `dir`, sorted by file name.
pub fn scan_png_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(OutlineError::FileSystem {
            path: dir.to_path_buf(),
            operation: "directory scan".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
        });
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| OutlineError::FileSystem {
            path: dir.to_path_buf(),
            operation: "directory scan".to_string(),
            source: e.into(),
        })?;
        let path = entry.path();
        if path.is_file() && is_png_name(&entry.file_name().to_string_lossy()) {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Glob `*.png` semantics: case-sensitive extension, dotfiles excluded.
fn is_png_name(name: &str) -> bool {
    name.ends_with(".png") && !name.starts_with('.')
}
