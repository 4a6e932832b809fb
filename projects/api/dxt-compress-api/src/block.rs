//! Block level compression and decompression.
//!
//! A block is 16 pixels (a 4x4 tile, row-major) given as 64 bytes of interleaved RGBA.

use crate::error::DxtCompressError;
use crate::mode::{CompressionMethod, CompressionMode};
use dxt_compress_bc1::{compress_bc1_block, decompress_bc1_block, BC1_BLOCK_SIZE};
use dxt_compress_bc2::{compress_bc2_block, decompress_bc2_block, BC2_BLOCK_SIZE};
use dxt_compress_bc3::{compress_bc3_block, decompress_bc3_block, BC3_BLOCK_SIZE};
use dxt_compress_common::decoded_4x4_block::Decoded4x4Block;

/// Mask selecting all 16 pixels of a block.
pub const FULL_BLOCK_MASK: u32 = 0xFFFF;

/// Compresses one tile into `output`, which must hold at least one block.
#[inline]
pub(crate) fn compress_tile(rgba: &[u8; 64], mask: u32, mode: &CompressionMode, output: &mut [u8]) {
    let pixels = Decoded4x4Block::from_rgba_bytes(rgba).pixels;
    let settings = mode.colour_settings();

    match mode.method {
        CompressionMethod::Dxt1 => {
            let mut block = [0u8; BC1_BLOCK_SIZE];
            compress_bc1_block(&pixels, mask, &settings, &mut block);
            output[..BC1_BLOCK_SIZE].copy_from_slice(&block);
        }
        CompressionMethod::Dxt3 => {
            let mut block = [0u8; BC2_BLOCK_SIZE];
            compress_bc2_block(&pixels, mask, &settings, &mut block);
            output[..BC2_BLOCK_SIZE].copy_from_slice(&block);
        }
        CompressionMethod::Dxt5 => {
            let mut block = [0u8; BC3_BLOCK_SIZE];
            compress_bc3_block(&pixels, mask, &settings, &mut block);
            output[..BC3_BLOCK_SIZE].copy_from_slice(&block);
        }
    }
}

/// Decompresses one block from the start of `block`, which must hold at least one block.
#[inline]
pub(crate) fn decompress_tile(block: &[u8], method: CompressionMethod) -> Decoded4x4Block {
    match method {
        CompressionMethod::Dxt1 => {
            let mut src = [0u8; BC1_BLOCK_SIZE];
            src.copy_from_slice(&block[..BC1_BLOCK_SIZE]);
            decompress_bc1_block(&src)
        }
        CompressionMethod::Dxt3 => {
            let mut src = [0u8; BC2_BLOCK_SIZE];
            src.copy_from_slice(&block[..BC2_BLOCK_SIZE]);
            decompress_bc2_block(&src)
        }
        CompressionMethod::Dxt5 => {
            let mut src = [0u8; BC3_BLOCK_SIZE];
            src.copy_from_slice(&block[..BC3_BLOCK_SIZE]);
            decompress_bc3_block(&src)
        }
    }
}

/// Compresses a full 4x4 block.
///
/// Equivalent to [`compress_block_masked`] with [`FULL_BLOCK_MASK`].
///
/// # Errors
///
/// - [`DxtCompressError::OutputBufferTooSmall`] if `output` is shorter than one block
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use dxt_compress_api::{compress_block, CompressionMode};
///
/// let red: [u8; 64] = core::array::from_fn(|i| if i % 4 == 1 || i % 4 == 2 { 0 } else { 255 });
/// let mut block = [0u8; 8];
/// compress_block(&red, &CompressionMode::default(), &mut block)?;
/// # Ok(())
/// # }
/// ```
pub fn compress_block(
    rgba: &[u8; 64],
    mode: &CompressionMode,
    output: &mut [u8],
) -> Result<(), DxtCompressError> {
    compress_block_masked(rgba, FULL_BLOCK_MASK, mode, output)
}

/// Compresses a 4x4 block where only some pixels are real.
///
/// Pixels whose bit in `mask` is clear are ignored by the colour and alpha fits, which is
/// how partial tiles at the right and bottom edge of an image are handled.
///
/// # Parameters
///
/// - `rgba`: 16 pixels of interleaved RGBA, row-major
/// - `mask`: Bit `i` set means pixel `i` takes part
/// - `mode`: The compression configuration
/// - `output`: Receives one block of [`CompressionMethod::block_size`] bytes
///
/// # Errors
///
/// - [`DxtCompressError::OutputBufferTooSmall`] if `output` is shorter than one block
pub fn compress_block_masked(
    rgba: &[u8; 64],
    mask: u32,
    mode: &CompressionMode,
    output: &mut [u8],
) -> Result<(), DxtCompressError> {
    let needed = mode.method.block_size();
    if output.len() < needed {
        return Err(DxtCompressError::OutputBufferTooSmall {
            needed,
            actual: output.len(),
        });
    }

    compress_tile(rgba, mask, mode, output);
    Ok(())
}

/// Decompresses one block into 16 pixels of interleaved RGBA, row-major.
///
/// # Errors
///
/// - [`DxtCompressError::InvalidCompressedLength`] if `block` is shorter than one block
pub fn decompress_block(block: &[u8], mode: &CompressionMode) -> Result<[u8; 64], DxtCompressError> {
    let expected = mode.method.block_size();
    if block.len() < expected {
        return Err(DxtCompressError::InvalidCompressedLength {
            expected,
            actual: block.len(),
        });
    }

    Ok(decompress_tile(block, mode.method).to_rgba_bytes())
}
