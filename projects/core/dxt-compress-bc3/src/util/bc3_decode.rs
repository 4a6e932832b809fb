//! BC3 (DXT4/DXT5) decoding implementation; based on MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10, AMD or Nvidia
//! method.

use crate::alpha::decompress_alpha_dxt5;
use dxt_compress_bc1::util::decode_colour_block;
use dxt_compress_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a BC3 block into a structured representation of pixels
///
/// # Example
///
/// ```
/// use dxt_compress_bc3::util::decode_bc3_block;
///
/// let bc3_block = [0u8; 16]; // Compressed BC3 block
///
/// // Decode the BC3 block into a structured representation
/// let decoded = decode_bc3_block(&bc3_block);
///
/// // alpha0 == alpha1 == 0 selects the 5-step codebook, index 0 is 0.
/// assert_eq!(decoded.get_pixel(0, 0).a, 0);
/// ```
#[inline]
pub fn decode_bc3_block(src: &[u8; 16]) -> Decoded4x4Block {
    let mut colour = [0u8; 8];
    colour.copy_from_slice(&src[8..16]);
    let mut alpha = [0u8; 8];
    alpha.copy_from_slice(&src[0..8]);

    // BC3 always uses the 4 colour codebook (no transparency from color section)
    let mut block = decode_colour_block(&colour, false);
    decompress_alpha_dxt5(&alpha, &mut block.pixels);
    block
}
