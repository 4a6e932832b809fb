//! The 8 byte alpha block of BC2.
//!
//! Every pixel stores its alpha quantised to 4 bits. Pixels are packed two per byte in
//! row-major order, the lower pixel index in the low nibble.

use dxt_compress_common::color_8888::Color8888;
use dxt_compress_common::math::float_to_int;

/// Size of the explicit alpha block in bytes.
pub const EXPLICIT_ALPHA_BLOCK_SIZE: usize = 8;

/// Quantises the alpha of 16 pixels to 4 bits each and packs them.
///
/// Pixels whose bit in `mask` is clear are written as 0.
///
/// # Example
///
/// ```
/// use dxt_compress_bc2::alpha::compress_alpha_dxt3;
/// use dxt_compress_common::color_8888::Color8888;
///
/// let rgba = [Color8888::new(0, 0, 0, 255); 16];
/// let mut block = [0u8; 8];
/// compress_alpha_dxt3(&rgba, 0xFFFF, &mut block);
/// assert_eq!(block, [0xFF; 8]);
/// ```
pub fn compress_alpha_dxt3(
    rgba: &[Color8888; 16],
    mask: u32,
    block: &mut [u8; EXPLICIT_ALPHA_BLOCK_SIZE],
) {
    let quantise = |i: usize| -> u8 {
        if mask & (1 << i) == 0 {
            return 0;
        }
        float_to_int(rgba[i].a as f32 * (15.0 / 255.0), 15) as u8
    };

    for (i, byte) in block.iter_mut().enumerate() {
        let q1 = quantise(2 * i);
        let q2 = quantise(2 * i + 1);
        *byte = q1 | (q2 << 4);
    }
}

/// Unpacks the alpha of 16 pixels, expanding each 4-bit value `v` to `v * 17`.
///
/// Only the alpha channel of `pixels` is written.
pub fn decompress_alpha_dxt3(block: &[u8; EXPLICIT_ALPHA_BLOCK_SIZE], pixels: &mut [Color8888; 16]) {
    for (i, &byte) in block.iter().enumerate() {
        let lo = byte & 0x0F;
        let hi = byte >> 4;
        pixels[2 * i].a = lo | (lo << 4);
        pixels[2 * i + 1].a = hi | (hi << 4);
    }
}
