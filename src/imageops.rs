pub mod convert_color;
pub mod gaussian;
pub mod mask;

pub use convert_color::to_intensity;
pub use mask::{dilate, render_outline};
