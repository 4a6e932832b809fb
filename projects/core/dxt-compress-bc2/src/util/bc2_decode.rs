//! BC2 (DXT3) decoding implementation; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/textures-with-explicit-alpha>

use crate::alpha::decompress_alpha_dxt3;
use dxt_compress_bc1::util::decode_colour_block;
use dxt_compress_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a BC2 block into a structured representation of pixels
///
/// # Example
///
/// ```
/// use dxt_compress_bc2::util::decode_bc2_block;
///
/// let mut bc2_block = [0u8; 16];
/// bc2_block[0] = 0xF0; // pixel 1 fully opaque, pixel 0 fully transparent
/// let decoded = decode_bc2_block(&bc2_block);
///
/// assert_eq!(decoded.pixels[0].a, 0);
/// assert_eq!(decoded.pixels[1].a, 255);
/// ```
#[inline]
pub fn decode_bc2_block(src: &[u8; 16]) -> Decoded4x4Block {
    let mut colour = [0u8; 8];
    colour.copy_from_slice(&src[8..16]);
    let mut alpha = [0u8; 8];
    alpha.copy_from_slice(&src[0..8]);

    // BC2 always uses the 4 colour codebook.
    let mut block = decode_colour_block(&colour, false);
    decompress_alpha_dxt3(&alpha, &mut block.pixels);
    block
}
