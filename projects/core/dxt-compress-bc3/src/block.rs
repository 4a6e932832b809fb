//! Whole BC3 blocks.

use crate::alpha::{compress_alpha_dxt5, INTERPOLATED_ALPHA_BLOCK_SIZE};
use crate::util::decode_bc3_block;
use dxt_compress_bc1::colour_block::COLOUR_BLOCK_SIZE;
use dxt_compress_bc1::colour_fit::{compress_colour_block, ColourCompressSettings};
use dxt_compress_common::color_8888::Color8888;
use dxt_compress_common::decoded_4x4_block::Decoded4x4Block;

/// Size of a BC3 block in bytes.
pub const BC3_BLOCK_SIZE: usize = 16;

/// Compresses 16 pixels into a BC3 block.
///
/// # Parameters
///
/// - `rgba`: The 16 pixels of the block, row-major
/// - `mask`: Bit `i` set means pixel `i` is a real pixel. Clear bits are ignored,
///   use `0xFFFF` for a full block.
/// - `settings`: Fit and metric selection for the colour block
/// - `output`: Receives the compressed block
pub fn compress_bc3_block(
    rgba: &[Color8888; 16],
    mask: u32,
    settings: &ColourCompressSettings,
    output: &mut [u8; BC3_BLOCK_SIZE],
) {
    let mut colour = [0u8; COLOUR_BLOCK_SIZE];
    compress_colour_block(rgba, mask, false, settings, &mut colour);

    let mut alpha = [0u8; INTERPOLATED_ALPHA_BLOCK_SIZE];
    compress_alpha_dxt5(rgba, mask, &mut alpha);

    output[..INTERPOLATED_ALPHA_BLOCK_SIZE].copy_from_slice(&alpha);
    output[INTERPOLATED_ALPHA_BLOCK_SIZE..].copy_from_slice(&colour);
}

/// Decompresses a BC3 block into 16 pixels.
#[inline]
pub fn decompress_bc3_block(block: &[u8; BC3_BLOCK_SIZE]) -> Decoded4x4Block {
    decode_bc3_block(block)
}
