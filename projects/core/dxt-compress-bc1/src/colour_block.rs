//! Writing of the 8 byte colour block shared by BC1, BC2 and BC3.
//!
//! Layout:
//!
//! ```text
//! [0..2] colour0, RGB565 little endian
//! [2..4] colour1, RGB565 little endian
//! [4..8] 16 2-bit indices, 4 per byte, least significant bits first, row-major
//! ```
//!
//! When `colour0 <= colour1` a BC1 decoder switches to the 3 colour codebook
//! (colour0, colour1, midpoint, transparent black), otherwise it uses the 4 colour
//! codebook (colour0, colour1, 2/3 colour0 + 1/3 colour1, 1/3 colour0 + 2/3 colour1).
//! The writers below order the endpoints to select the intended codebook.

use dxt_compress_common::color_565::Color565;
use dxt_compress_common::math::Vec3;

/// Size of a colour block in bytes.
pub const COLOUR_BLOCK_SIZE: usize = 8;

/// Packs two endpoints and 16 2-bit indices into a colour block.
#[inline]
pub fn write_colour_block(a: Color565, b: Color565, indices: &[u8; 16], block: &mut [u8; 8]) {
    block[0..2].copy_from_slice(&a.to_le_bytes());
    block[2..4].copy_from_slice(&b.to_le_bytes());

    for (dst, ind) in block[4..8].iter_mut().zip(indices.chunks_exact(4)) {
        *dst = ind[0] | (ind[1] << 2) | (ind[2] << 4) | (ind[3] << 6);
    }
}

/// Writes a block using the 3 colour codebook.
///
/// `indices` select `0 = start`, `1 = end`, `2 = midpoint`, `3 = transparent`.
/// Endpoints are swapped as needed so that `colour0 <= colour1`.
pub fn write_colour_block3(start: Vec3, end: Vec3, indices: &[u8; 16], block: &mut [u8; 8]) {
    let mut a = Color565::from_vec3(start);
    let mut b = Color565::from_vec3(end);

    let mut remapped = *indices;
    if a > b {
        core::mem::swap(&mut a, &mut b);
        for index in &mut remapped {
            *index = match *index {
                0 => 1,
                1 => 0,
                other => other,
            };
        }
    }

    write_colour_block(a, b, &remapped, block);
}

/// Writes a block using the 4 colour codebook.
///
/// `indices` select `0 = start`, `1 = end`, `2 = 2/3 start + 1/3 end`, `3 = 1/3 start + 2/3 end`.
/// Endpoints are swapped as needed so that `colour0 > colour1`. If both endpoints quantise
/// to the same value the block cannot express 4 colours, so every index becomes 0.
pub fn write_colour_block4(start: Vec3, end: Vec3, indices: &[u8; 16], block: &mut [u8; 8]) {
    let mut a = Color565::from_vec3(start);
    let mut b = Color565::from_vec3(end);

    let mut remapped = *indices;
    if a < b {
        core::mem::swap(&mut a, &mut b);
        for index in &mut remapped {
            *index = (*index ^ 0x1) & 0x3;
        }
    } else if a == b {
        remapped = [0; 16];
    }

    write_colour_block(a, b, &remapped, block);
}
