use image::{DynamicImage, GrayImage, Luma, Rgb, Rgba};
use imageproc::map::map_colors;

// ITU-R BT.601 luma weights, scaled by 1000.
const RED_WEIGHT: u32 = 299;
const GREEN_WEIGHT: u32 = 587;
const BLUE_WEIGHT: u32 = 114;

fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = RED_WEIGHT * u32::from(r) + GREEN_WEIGHT * u32::from(g) + BLUE_WEIGHT * u32::from(b);
    ((weighted + 500) / 1000) as u8
}

/// Collapses an image to one 8-bit intensity channel.
///
/// Single-channel images pass through, colour images use BT.601 weights and
/// any alpha channel is dropped. Returns `None` for channel counts outside
/// `1..=4`.
pub fn to_intensity(image: &DynamicImage) -> Option<GrayImage> {
    match image.color().channel_count() {
        1 | 2 => Some(image.to_luma8()),
        3 => Some(map_colors(&image.to_rgb8(), |Rgb([r, g, b])| {
            Luma([luma(r, g, b)])
        })),
        4 => Some(map_colors(&image.to_rgba8(), |Rgba([r, g, b, _])| {
            Luma([luma(r, g, b)])
        })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, RgbImage, RgbaImage};

    #[test]
    fn test_luma_weights() {
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn test_gray_passes_through() {
        let gray = GrayImage::from_fn(4, 3, |x, y| Luma([(x * 10 + y) as u8]));
        let out = to_intensity(&DynamicImage::ImageLuma8(gray.clone())).unwrap();
        assert_eq!(out, gray);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = RgbaImage::from_pixel(2, 2, Rgba([10, 200, 30, 255]));
        let clear = RgbaImage::from_pixel(2, 2, Rgba([10, 200, 30, 0]));
        let a = to_intensity(&DynamicImage::ImageRgba8(opaque)).unwrap();
        let b = to_intensity(&DynamicImage::ImageRgba8(clear)).unwrap();
        assert_eq!(a, b);

        let rgb = RgbImage::from_pixel(2, 2, Rgb([10, 200, 30]));
        assert_eq!(to_intensity(&DynamicImage::ImageRgb8(rgb)).unwrap(), a);
    }

    #[test]
    fn test_sixteen_bit_is_narrowed() {
        let deep = DynamicImage::new_rgb16(5, 7);
        let out = to_intensity(&deep).unwrap();
        assert_eq!(out.dimensions(), (5, 7));
    }

    #[test]
    fn test_gray_alpha_drops_alpha() {
        let opaque = GrayAlphaImage::from_pixel(3, 3, LumaA([128, 255]));
        let clear = GrayAlphaImage::from_pixel(3, 3, LumaA([128, 0]));
        let a = to_intensity(&DynamicImage::ImageLumaA8(opaque)).unwrap();
        let b = to_intensity(&DynamicImage::ImageLumaA8(clear)).unwrap();
        assert_eq!(a, GrayImage::from_pixel(3, 3, Luma([128])));
        assert_eq!(a, b);
    }
}
