use crate::errors::Result;
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// Turns one decoded image into transparent line art.
///
/// The batch driver only depends on this trait, so the directory handling can
/// be exercised with a test double instead of the real edge detector.
pub trait EdgeOutliner: Send + Sync {
    /// Produces an RGBA buffer with the same dimensions as `image`.
    ///
    /// `path` is only used to label errors.
    fn outline(&self, path: &Path, image: &DynamicImage) -> Result<RgbaImage>;
}
