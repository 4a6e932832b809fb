//! The 8 byte interpolated alpha block of BC3.
//!
//! Layout:
//!
//! ```text
//! [0]    alpha0
//! [1]    alpha1
//! [2..5] indices of pixels 0-7, 3 bits each, packed little endian
//! [5..8] indices of pixels 8-15, 3 bits each, packed little endian
//! ```

use dxt_compress_common::color_8888::Color8888;

/// Size of the interpolated alpha block in bytes.
pub const INTERPOLATED_ALPHA_BLOCK_SIZE: usize = 8;

/// Widens `[min, max]` so it spans at least `steps`, staying within `[0, 255]`.
///
/// The maximum is raised first; the minimum is only lowered if that was not enough.
#[inline]
pub fn fix_range(min: &mut i32, max: &mut i32, steps: i32) {
    if *max - *min < steps {
        *max = (*min + steps).min(255);
    }
    if *max - *min < steps {
        *min = (*max - steps).max(0);
    }
}

/// Assigns every included pixel the nearest code, ties going to the lowest index.
///
/// Excluded pixels get index 0 and add no error. Returns the summed squared error.
fn fit_codes(rgba: &[Color8888; 16], mask: u32, codes: &[u8; 8], indices: &mut [u8; 16]) -> i32 {
    let mut err = 0;
    for i in 0..16 {
        if mask & (1 << i) == 0 {
            indices[i] = 0;
            continue;
        }

        let value = rgba[i].a as i32;
        let mut least = i32::MAX;
        let mut index = 0;
        for (j, &code) in codes.iter().enumerate() {
            let dist = value - code as i32;
            let dist = dist * dist;
            if dist < least {
                least = dist;
                index = j;
            }
        }

        indices[i] = index as u8;
        err += least;
    }

    err
}

/// Packs endpoints and 16 3-bit indices into an alpha block.
pub fn write_alpha_block(
    alpha0: u8,
    alpha1: u8,
    indices: &[u8; 16],
    block: &mut [u8; INTERPOLATED_ALPHA_BLOCK_SIZE],
) {
    block[0] = alpha0;
    block[1] = alpha1;

    for (half, dst) in indices.chunks_exact(8).zip(block[2..].chunks_exact_mut(3)) {
        let value = half
            .iter()
            .enumerate()
            .fold(0u32, |acc, (j, &index)| acc | ((index as u32) << (3 * j)));
        dst.copy_from_slice(&value.to_le_bytes()[..3]);
    }
}

/// Writes a block using the 5-step codebook, ordering the endpoints so `alpha0 <= alpha1`.
fn write_alpha_block5(
    alpha0: u8,
    alpha1: u8,
    indices: &[u8; 16],
    block: &mut [u8; INTERPOLATED_ALPHA_BLOCK_SIZE],
) {
    if alpha0 > alpha1 {
        let swapped = indices.map(|index| match index {
            0 => 1,
            1 => 0,
            2..=5 => 7 - index,
            other => other,
        });
        write_alpha_block(alpha1, alpha0, &swapped, block);
    } else {
        write_alpha_block(alpha0, alpha1, indices, block);
    }
}

/// Writes a block using the 7-step codebook, ordering the endpoints so `alpha0 > alpha1`.
fn write_alpha_block7(
    alpha0: u8,
    alpha1: u8,
    indices: &[u8; 16],
    block: &mut [u8; INTERPOLATED_ALPHA_BLOCK_SIZE],
) {
    if alpha0 < alpha1 {
        let swapped = indices.map(|index| match index {
            0 => 1,
            1 => 0,
            other => 9 - other,
        });
        write_alpha_block(alpha1, alpha0, &swapped, block);
    } else {
        write_alpha_block(alpha0, alpha1, indices, block);
    }
}

/// Builds the 5-step codebook: endpoints, 4 interpolants, then 0 and 255.
fn codes5(min: i32, max: i32) -> [u8; 8] {
    let mut codes = [0u8; 8];
    codes[0] = min as u8;
    codes[1] = max as u8;
    for i in 1..5 {
        codes[1 + i as usize] = (((5 - i) * min + i * max) / 5) as u8;
    }
    codes[6] = 0;
    codes[7] = 255;
    codes
}

/// Builds the 7-step codebook: endpoints, then 6 interpolants.
fn codes7(min: i32, max: i32) -> [u8; 8] {
    let mut codes = [0u8; 8];
    codes[0] = min as u8;
    codes[1] = max as u8;
    for i in 1..7 {
        codes[1 + i as usize] = (((7 - i) * min + i * max) / 7) as u8;
    }
    codes
}

/// Compresses the alpha of 16 pixels into an interpolated alpha block.
///
/// Both codebooks are fitted. The 5-step codebook ignores exact 0 and 255 when choosing
/// its range, since it has dedicated codes for them. The codebook with the lower error
/// wins; ties go to the 5-step codebook.
///
/// # Example
///
/// ```
/// use dxt_compress_bc3::alpha::compress_alpha_dxt5;
/// use dxt_compress_common::color_8888::Color8888;
///
/// let rgba = [Color8888::new(0, 0, 0, 255); 16];
/// let mut block = [0u8; 8];
/// compress_alpha_dxt5(&rgba, 0xFFFF, &mut block);
///
/// // Fully opaque pixels use the explicit 255 code of the 5-step codebook.
/// assert!(block[0] <= block[1]);
/// assert_eq!(block[2..8], [0xFF; 6]);
/// ```
pub fn compress_alpha_dxt5(
    rgba: &[Color8888; 16],
    mask: u32,
    block: &mut [u8; INTERPOLATED_ALPHA_BLOCK_SIZE],
) {
    let mut min5 = 255;
    let mut max5 = 0;
    let mut min7 = 255;
    let mut max7 = 0;
    for (i, pixel) in rgba.iter().enumerate() {
        if mask & (1 << i) == 0 {
            continue;
        }

        let value = pixel.a as i32;
        min7 = min7.min(value);
        max7 = max7.max(value);
        if value != 0 && value < min5 {
            min5 = value;
        }
        if value != 255 && value > max5 {
            max5 = value;
        }
    }

    // Sets with no usable values would otherwise invert the range.
    if min5 > max5 {
        min5 = max5;
    }
    if min7 > max7 {
        min7 = max7;
    }

    fix_range(&mut min5, &mut max5, 5);
    fix_range(&mut min7, &mut max7, 7);

    let mut indices5 = [0u8; 16];
    let err5 = fit_codes(rgba, mask, &codes5(min5, max5), &mut indices5);
    let mut indices7 = [0u8; 16];
    let err7 = fit_codes(rgba, mask, &codes7(min7, max7), &mut indices7);

    if err5 <= err7 {
        write_alpha_block5(min5 as u8, max5 as u8, &indices5, block);
    } else {
        write_alpha_block7(min7 as u8, max7 as u8, &indices7, block);
    }
}

/// Decodes the alpha codebook of an interpolated alpha block.
#[inline]
pub fn alpha_codebook(alpha0: u8, alpha1: u8) -> [u8; 8] {
    let (a0, a1) = (alpha0 as u32, alpha1 as u32);
    let mut codes = [0u8; 8];
    codes[0] = alpha0;
    codes[1] = alpha1;

    if alpha0 <= alpha1 {
        for i in 1..5 {
            codes[1 + i as usize] = (((5 - i) * a0 + i * a1) / 5) as u8;
        }
        codes[6] = 0;
        codes[7] = 255;
    } else {
        for i in 1..7 {
            codes[1 + i as usize] = (((7 - i) * a0 + i * a1) / 7) as u8;
        }
    }

    codes
}

/// Unpacks the alpha of 16 pixels from an interpolated alpha block.
///
/// Only the alpha channel of `pixels` is written.
pub fn decompress_alpha_dxt5(block: &[u8; INTERPOLATED_ALPHA_BLOCK_SIZE], pixels: &mut [Color8888; 16]) {
    let codes = alpha_codebook(block[0], block[1]);

    for (half, src) in pixels.chunks_exact_mut(8).zip(block[2..].chunks_exact(3)) {
        let value = u32::from_le_bytes([src[0], src[1], src[2], 0]);
        for (j, pixel) in half.iter_mut().enumerate() {
            let index = (value >> (3 * j)) & 0b111;
            pixel.a = codes[index as usize];
        }
    }
}
