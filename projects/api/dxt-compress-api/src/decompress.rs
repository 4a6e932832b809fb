//! Image level decompression.

use crate::block::decompress_tile;
use crate::compress::{blocks_along, storage_requirements};
use crate::error::DxtCompressError;
use crate::image::{rgba_len, RawImage, BYTES_PER_PIXEL};
use crate::mode::CompressionMode;
use tracing::{debug, instrument};

/// Decompresses a DXT image into a caller provided RGBA8 buffer.
///
/// Blocks are read row-major. Pixels of edge blocks that fall outside the image are
/// discarded. Only [`CompressionMode::method`] is used.
///
/// # Parameters
///
/// - `blocks`: The compressed blocks; must hold at least [`storage_requirements`] bytes
/// - `width`: Width in pixels
/// - `height`: Height in pixels
/// - `output`: Receives `width * height * 4` bytes of RGBA
/// - `mode`: The compression configuration the blocks were made with
///
/// # Errors
///
/// - [`DxtCompressError::InvalidDimensions`] if either dimension is zero or the size overflows
/// - [`DxtCompressError::InvalidCompressedLength`] if `blocks` is too short
/// - [`DxtCompressError::OutputBufferTooSmall`] if `output` is too small
#[instrument(skip(blocks, output, mode), fields(method = ?mode.method))]
pub fn decompress_image_into(
    blocks: &[u8],
    width: usize,
    height: usize,
    output: &mut [u8],
    mode: &CompressionMode,
) -> Result<(), DxtCompressError> {
    let needed = rgba_len(width, height)?;
    let expected = storage_requirements(width, height, mode)?;
    if blocks.len() < expected {
        return Err(DxtCompressError::InvalidCompressedLength {
            expected,
            actual: blocks.len(),
        });
    }
    if output.len() < needed {
        return Err(DxtCompressError::OutputBufferTooSmall {
            needed,
            actual: output.len(),
        });
    }

    let blocks_wide = blocks_along(width);
    let blocks_high = blocks_along(height);
    let block_size = mode.method.block_size();
    debug!(blocks_wide, blocks_high, "decompressing image");

    for (index, block) in blocks[..expected].chunks_exact(block_size).enumerate() {
        let bx = index % blocks_wide;
        let by = index / blocks_wide;
        let decoded = decompress_tile(block, mode.method);

        for py in 0..4 {
            let sy = by * 4 + py;
            if sy >= height {
                break;
            }

            for px in 0..4 {
                let sx = bx * 4 + px;
                if sx >= width {
                    break;
                }

                let dst = (sy * width + sx) * BYTES_PER_PIXEL;
                output[dst..dst + BYTES_PER_PIXEL]
                    .copy_from_slice(&decoded.get_pixel(px, py).to_bytes());
            }
        }
    }

    Ok(())
}

/// Decompresses a DXT image into a newly allocated [`RawImage`].
///
/// See [`decompress_image_into`] for details.
///
/// # Errors
///
/// - [`DxtCompressError::InvalidDimensions`] if either dimension is zero or the size overflows
/// - [`DxtCompressError::InvalidCompressedLength`] if `blocks` is too short
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use dxt_compress_api::{compress_image, decompress_image, CompressionMode, RawImage};
///
/// let mode = CompressionMode::default();
/// let image = RawImage::new(2, 2, vec![255u8; 16])?;
/// let compressed = compress_image(&image, &mode)?;
///
/// let restored = decompress_image(&compressed, 2, 2, &mode)?;
/// assert_eq!(restored, image);
/// # Ok(())
/// # }
/// ```
pub fn decompress_image(
    blocks: &[u8],
    width: usize,
    height: usize,
    mode: &CompressionMode,
) -> Result<RawImage, DxtCompressError> {
    let mut image = RawImage::new_zeroed(width, height)?;
    decompress_image_into(blocks, width, height, image.pixels_mut(), mode)?;
    Ok(image)
}
