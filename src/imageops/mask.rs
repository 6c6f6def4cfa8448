use image::{GrayImage, Luma, Rgba, RgbaImage};
use imageproc::map::map_colors;
use imageproc::morphology::{grayscale_dilate, Mask};

pub const LINE: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Grows the non-zero regions of `mask` with a `size`×`size` all-ones
/// structuring element anchored at `(size / 2, size / 2)`.
///
/// `size` must be in `1..=255`.
pub fn dilate(mask: &GrayImage, size: u8, iterations: u32) -> GrayImage {
    let element = Mask::from_image(
        &GrayImage::from_pixel(u32::from(size), u32::from(size), Luma([255])),
        size / 2,
        size / 2,
    );
    (0..iterations).fold(mask.clone(), |grown, _| grayscale_dilate(&grown, &element))
}

/// Paints every non-zero mask pixel opaque black; everything else stays
/// fully transparent.
pub fn render_outline(mask: &GrayImage) -> RgbaImage {
    map_colors(mask, |Luma([v])| if v > 0 { LINE } else { TRANSPARENT })
}
