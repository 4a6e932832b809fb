//! BC1 (DXT1) decoding implementation; based on etcpak
//! <https://github.com/wolfpld/etcpak> and MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d9/opaque-and-1-bit-alpha-textures>

use dxt_compress_common::{
    color_565::Color565, color_8888::Color8888, decoded_4x4_block::Decoded4x4Block,
};

/// Decodes the 8 byte colour block of a BC1, BC2 or BC3 block.
///
/// # Parameters
///
/// - `src`: The colour block
/// - `is_bc1`: Honour the 3 colour + transparent codebook when `colour0 <= colour1`.
///   BC2 and BC3 always decode the 4 colour codebook.
///
/// # Example
///
/// ```
/// use dxt_compress_bc1::util::decode_colour_block;
///
/// // Solid red, all pixels index 0
/// let block = [0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
/// let decoded = decode_colour_block(&block, true);
/// assert_eq!(decoded.pixels[0].r, 255);
/// ```
#[inline]
pub fn decode_colour_block(src: &[u8; 8], is_bc1: bool) -> Decoded4x4Block {
    // Extract color endpoints and index data
    let c0 = Color565::from_le_bytes([src[0], src[1]]);
    let c1 = Color565::from_le_bytes([src[2], src[3]]);
    let idx: u32 = u32::from_le_bytes([src[4], src[5], src[6], src[7]]);

    let (r0, g0, b0) = (c0.red() as u32, c0.green() as u32, c0.blue() as u32);
    let (r1, g1, b1) = (c1.red() as u32, c1.green() as u32, c1.blue() as u32);

    // Create color dictionary
    let mut dict = [Color8888::default(); 4];
    dict[0] = c0.to_color_8888();
    dict[1] = c1.to_color_8888();

    if is_bc1 && c0 <= c1 {
        // Three-color block
        dict[2] = Color8888::new(
            ((r0 + r1) / 2) as u8,
            ((g0 + g1) / 2) as u8,
            ((b0 + b1) / 2) as u8,
            255,
        );
        dict[3] = Color8888::new(0, 0, 0, 0); // Transparent black
    } else {
        // Four-color block
        dict[2] = Color8888::new(
            ((2 * r0 + r1) / 3) as u8,
            ((2 * g0 + g1) / 3) as u8,
            ((2 * b0 + b1) / 3) as u8,
            255,
        );
        dict[3] = Color8888::new(
            ((r0 + 2 * r1) / 3) as u8,
            ((g0 + 2 * g1) / 3) as u8,
            ((b0 + 2 * b1) / 3) as u8,
            255,
        );
    }

    let mut result = Decoded4x4Block::new(Color8888::default());
    for (i, pixel) in result.pixels.iter_mut().enumerate() {
        let pixel_idx = (idx >> (i * 2)) & 0x3;
        *pixel = dict[pixel_idx as usize];
    }

    result
}

/// Decodes a BC1 block into a structured representation of pixels
///
/// # Example
///
/// ```
/// use dxt_compress_bc1::util::decode_bc1_block;
///
/// let bc1_block = [0u8; 8]; // Compressed BC1 block
/// let decoded = decode_bc1_block(&bc1_block);
///
/// // Equal endpoints select the 3 colour codebook; index 0 is black.
/// assert_eq!(decoded.pixels[0].a, 255);
/// ```
#[inline]
pub fn decode_bc1_block(src: &[u8; 8]) -> Decoded4x4Block {
    decode_colour_block(src, true)
}
