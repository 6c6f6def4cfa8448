use image::GrayImage;
use imageproc::filter::separable_filter_equal;

/// Fixed kernels used when the spread is derived from a small size.
const SMALL_KERNELS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125],
];

/// Spread picked for a kernel of `size` taps when none is given.
pub fn auto_sigma(size: u32) -> f32 {
    0.3 * ((size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Normalised 1-D Gaussian weights with `size` taps.
///
/// `size` must be odd. A non-positive `sigma` derives the spread from
/// `size`.
pub fn kernel(size: u32, sigma: f32) -> Vec<f32> {
    debug_assert!(size % 2 == 1, "kernel size must be odd");

    if sigma <= 0.0 {
        if let Some(table) = SMALL_KERNELS.get((size / 2) as usize) {
            return table.to_vec();
        }
    }

    let sigma = if sigma > 0.0 { sigma } else { auto_sigma(size) };
    let center = (size / 2) as f32;
    let weights: Vec<f32> = (0..size)
        .map(|i| {
            let d = i as f32 - center;
            (-(d * d) / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    let total: f32 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

/// Smooths `image` with a `size`×`size` Gaussian, applied separably.
pub fn blur(image: &GrayImage, size: u32, sigma: f32) -> GrayImage {
    separable_filter_equal(image, &kernel(size, sigma))
}
