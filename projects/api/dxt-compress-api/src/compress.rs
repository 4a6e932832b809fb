//! Image level compression.

use crate::block::compress_tile;
use crate::error::DxtCompressError;
use crate::image::{rgba_len, RawImage, BYTES_PER_PIXEL};
use crate::mode::CompressionMode;
use tracing::{debug, instrument};

/// Images with fewer blocks than this are always compressed on the calling thread.
pub const MIN_BLOCKS_FOR_PARALLEL: usize = 16;

/// Number of 4x4 blocks needed to cover `pixels` pixels along one axis.
#[inline]
pub(crate) fn blocks_along(pixels: usize) -> usize {
    pixels.div_ceil(4)
}

/// Returns the number of bytes needed to store a `width` x `height` image compressed
/// with `mode`.
///
/// Partial blocks at the right and bottom edge take a full block each.
///
/// # Errors
///
/// - [`DxtCompressError::InvalidDimensions`] if the size overflows
///
/// # Examples
///
/// ```
/// use dxt_compress_api::{storage_requirements, CompressionMethod, CompressionModeBuilder};
///
/// let dxt1 = CompressionModeBuilder::new().build();
/// assert_eq!(storage_requirements(5, 5, &dxt1), Ok(4 * 8));
///
/// let dxt5 = CompressionModeBuilder::new().method(CompressionMethod::Dxt5).build();
/// assert_eq!(storage_requirements(16, 4, &dxt5), Ok(4 * 16));
/// ```
pub fn storage_requirements(
    width: usize,
    height: usize,
    mode: &CompressionMode,
) -> Result<usize, DxtCompressError> {
    blocks_along(width)
        .checked_mul(blocks_along(height))
        .and_then(|blocks| blocks.checked_mul(mode.method.block_size()))
        .ok_or(DxtCompressError::InvalidDimensions { width, height })
}

/// Copies the 4x4 tile at block `(bx, by)` out of the image.
///
/// Pixels outside the image are left as zero and cleared in the returned mask.
#[inline]
fn extract_tile(rgba: &[u8], width: usize, height: usize, bx: usize, by: usize) -> ([u8; 64], u32) {
    let mut tile = [0u8; 64];
    let mut mask = 0u32;

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

            let src = (sy * width + sx) * BYTES_PER_PIXEL;
            let dst = (py * 4 + px) * BYTES_PER_PIXEL;
            tile[dst..dst + BYTES_PER_PIXEL].copy_from_slice(&rgba[src..src + BYTES_PER_PIXEL]);
            mask |= 1 << (py * 4 + px);
        }
    }

    (tile, mask)
}

/// Compresses one row of blocks into `output`.
fn compress_row(
    rgba: &[u8],
    width: usize,
    height: usize,
    by: usize,
    mode: &CompressionMode,
    output: &mut [u8],
) {
    let block_size = mode.method.block_size();
    for (bx, block) in output.chunks_exact_mut(block_size).enumerate() {
        let (tile, mask) = extract_tile(rgba, width, height, bx, by);
        compress_tile(&tile, mask, mode, block);
    }
}

fn compress_rows(
    rgba: &[u8],
    width: usize,
    height: usize,
    row_size: usize,
    mode: &CompressionMode,
    output: &mut [u8],
) {
    for (by, row) in output.chunks_mut(row_size).enumerate() {
        compress_row(rgba, width, height, by, mode, row);
    }
}

#[cfg(feature = "multithreaded")]
fn compress_rows_parallel(
    rgba: &[u8],
    width: usize,
    height: usize,
    row_size: usize,
    mode: &CompressionMode,
    output: &mut [u8],
) {
    use rayon::prelude::*;

    output
        .par_chunks_mut(row_size)
        .enumerate()
        .for_each(|(by, row)| compress_row(rgba, width, height, by, mode, row));
}

#[cfg(not(feature = "multithreaded"))]
fn compress_rows_parallel(
    rgba: &[u8],
    width: usize,
    height: usize,
    row_size: usize,
    mode: &CompressionMode,
    output: &mut [u8],
) {
    compress_rows(rgba, width, height, row_size, mode, output);
}

/// Compresses an RGBA8 image into a caller provided buffer.
///
/// Blocks are written row-major, left to right then top to bottom. If
/// [`CompressionMode::use_parallel_processing`] is set, the `multithreaded` feature is
/// enabled and the image has at least [`MIN_BLOCKS_FOR_PARALLEL`] blocks, rows of blocks
/// are compressed in parallel. The output is identical either way.
///
/// # Parameters
///
/// - `rgba`: `width * height * 4` bytes of interleaved RGBA, row-major
/// - `width`: Width in pixels
/// - `height`: Height in pixels
/// - `output`: Receives the blocks; must hold at least [`storage_requirements`] bytes
/// - `mode`: The compression configuration
///
/// # Errors
///
/// - [`DxtCompressError::InvalidDimensions`] if either dimension is zero or the size overflows
/// - [`DxtCompressError::InvalidInputLength`] if `rgba` does not match the dimensions
/// - [`DxtCompressError::OutputBufferTooSmall`] if `output` is too small
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use dxt_compress_api::{compress_image_into, storage_requirements, CompressionMode};
///
/// let rgba = vec![255u8; 8 * 4 * 4];
/// let mode = CompressionMode::default();
/// let mut output = vec![0u8; storage_requirements(8, 4, &mode)?];
///
/// compress_image_into(&rgba, 8, 4, &mut output, &mode)?;
/// # Ok(())
/// # }
/// ```
#[instrument(skip(rgba, output, mode), fields(method = ?mode.method, fit = ?mode.fit))]
pub fn compress_image_into(
    rgba: &[u8],
    width: usize,
    height: usize,
    output: &mut [u8],
    mode: &CompressionMode,
) -> Result<(), DxtCompressError> {
    let expected = rgba_len(width, height)?;
    if rgba.len() != expected {
        return Err(DxtCompressError::InvalidInputLength {
            expected,
            actual: rgba.len(),
        });
    }

    let needed = storage_requirements(width, height, mode)?;
    if output.len() < needed {
        return Err(DxtCompressError::OutputBufferTooSmall {
            needed,
            actual: output.len(),
        });
    }

    let blocks_wide = blocks_along(width);
    let blocks_high = blocks_along(height);
    let row_size = blocks_wide * mode.method.block_size();
    let output = &mut output[..needed];

    let parallel = cfg!(feature = "multithreaded")
        && mode.use_parallel_processing
        && blocks_wide * blocks_high >= MIN_BLOCKS_FOR_PARALLEL;
    debug!(blocks_wide, blocks_high, parallel, "compressing image");

    if parallel {
        compress_rows_parallel(rgba, width, height, row_size, mode, output);
    } else {
        compress_rows(rgba, width, height, row_size, mode, output);
    }

    Ok(())
}

/// Compresses an RGBA8 image into a newly allocated buffer.
///
/// See [`compress_image_into`] for details.
///
/// # Errors
///
/// - [`DxtCompressError::InvalidDimensions`] if the compressed size overflows
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use dxt_compress_api::{compress_image, CompressionMode, RawImage};
///
/// let image = RawImage::new(4, 4, vec![0u8; 64])?;
/// let compressed = compress_image(&image, &CompressionMode::default())?;
/// assert_eq!(compressed.len(), 8);
/// # Ok(())
/// # }
/// ```
pub fn compress_image(image: &RawImage, mode: &CompressionMode) -> Result<Vec<u8>, DxtCompressError> {
    let mut output = vec![0u8; storage_requirements(image.width(), image.height(), mode)?];
    compress_image_into(image.pixels(), image.width(), image.height(), &mut output, mode)?;
    Ok(output)
}
