use crate::errors::Result;
use crate::imageops::mask::TRANSPARENT;
use crate::traits::EdgeOutliner;
use image::{DynamicImage, GenericImageView, RgbaImage};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// Test double that records which files reached the transform and returns a
/// blank canvas of the right size.
#[derive(Debug, Default)]
pub struct RecordingOutliner {
    seen: Mutex<Vec<PathBuf>>,
}

impl RecordingOutliner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths handed to [`EdgeOutliner::outline`], in call order.
    pub fn seen(&self) -> Vec<PathBuf> {
        self.seen.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.seen.lock().len()
    }
}

impl EdgeOutliner for RecordingOutliner {
    fn outline(&self, path: &Path, image: &DynamicImage) -> Result<RgbaImage> {
        self.seen.lock().push(path.to_path_buf());
        let (width, height) = image.dimensions();
        Ok(RgbaImage::from_pixel(width, height, TRANSPARENT))
    }
}
