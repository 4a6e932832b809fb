//! Whole BC1 blocks.

use crate::colour_fit::{compress_colour_block, ColourCompressSettings};
use crate::util::decode_bc1_block;
use dxt_compress_common::color_8888::Color8888;
use dxt_compress_common::decoded_4x4_block::Decoded4x4Block;

/// Size of a BC1 block in bytes.
pub const BC1_BLOCK_SIZE: usize = 8;

/// Compresses 16 pixels into a BC1 block.
///
/// Pixels with alpha below 128 are encoded as transparent black, which forces the
/// 3 colour codebook for the block.
///
/// # Parameters
///
/// - `rgba`: The 16 pixels of the block, row-major
/// - `mask`: Bit `i` set means pixel `i` is a real pixel. Clear bits are ignored,
///   use `0xFFFF` for a full block.
/// - `settings`: Fit and metric selection
/// - `output`: Receives the compressed block
#[inline]
pub fn compress_bc1_block(
    rgba: &[Color8888; 16],
    mask: u32,
    settings: &ColourCompressSettings,
    output: &mut [u8; BC1_BLOCK_SIZE],
) {
    compress_colour_block(rgba, mask, true, settings, output);
}

/// Decompresses a BC1 block into 16 pixels.
#[inline]
pub fn decompress_bc1_block(block: &[u8; BC1_BLOCK_SIZE]) -> Decoded4x4Block {
    decode_bc1_block(block)
}
