//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure for representing decompressed
//! 4x4 pixel blocks produced by the BC1, BC2 and BC3 decoders.
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```
//!
//! ## Usage
//!
//! ```
//! use dxt_compress_common::color_8888::Color8888;
//! use dxt_compress_common::decoded_4x4_block::Decoded4x4Block;
//!
//! let block = Decoded4x4Block::new(Color8888::new(255, 0, 0, 255));
//! assert_eq!(block.get_pixel(3, 3), Color8888::new(255, 0, 0, 255));
//! assert_eq!(block.to_rgba_bytes()[..4], [255, 0, 0, 255]);
//! ```

use crate::color_8888::Color8888;

/// Represents a decoded 4x4 block of BC pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded4x4Block {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    pub fn new(pixel: Color8888) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Builds a block from 64 bytes of interleaved RGBA pixels.
    pub fn from_rgba_bytes(rgba: &[u8; 64]) -> Self {
        Self {
            pixels: core::array::from_fn(|i| {
                let p = &rgba[4 * i..4 * i + 4];
                Color8888::from_bytes([p[0], p[1], p[2], p[3]])
            }),
        }
    }

    /// Returns the block as 64 bytes of interleaved RGBA pixels.
    pub fn to_rgba_bytes(&self) -> [u8; 64] {
        let mut rgba = [0u8; 64];
        for (dst, pixel) in rgba.chunks_exact_mut(4).zip(&self.pixels) {
            dst.copy_from_slice(&pixel.to_bytes());
        }
        rgba
    }

    /// Gets a pixel at the specified coordinates (0-3, 0-3)
    ///
    /// # Panics
    ///
    /// If `x` or `y` is not below 4.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < 4 && y < 4, "pixel ({x}, {y}) is outside of a 4x4 block");
        self.pixels[y * 4 + x]
    }
}
