//! Common imports for tests in this crate.

pub use crate::*;
pub use rstest::rstest;

/// A smooth RGBA gradient with varying alpha.
pub fn gradient_image(width: usize, height: usize) -> RawImage {
    let mut pixels = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[
                (x * 255 / width) as u8,
                (y * 255 / height) as u8,
                128,
                ((x + y) * 255 / (width + height)) as u8,
            ]);
        }
    }
    RawImage::new(width, height, pixels).unwrap()
}
