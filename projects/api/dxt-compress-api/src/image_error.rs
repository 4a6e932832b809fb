//! Measuring the error introduced by compression.

use crate::decompress::decompress_image;
use crate::error::DxtCompressError;
use crate::image::{RawImage, BYTES_PER_PIXEL};
use crate::mode::{CompressionMethod, CompressionMode};

/// Error between an image and its compressed form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageError {
    /// Root mean square difference over every compared channel.
    pub rms: f64,
    /// Largest absolute difference of any compared channel.
    pub max_channel_delta: u8,
}

impl ImageError {
    /// `true` if the compressed image decodes to exactly the original.
    #[inline]
    pub fn is_lossless(&self) -> bool {
        self.max_channel_delta == 0
    }
}

/// Decompresses `compressed` and compares it against `original`.
///
/// Red, green and blue are always compared. Alpha is compared for
/// [`CompressionMethod::Dxt3`] and [`CompressionMethod::Dxt5`]; DXT1 alpha is 1-bit
/// and is left out.
///
/// # Errors
///
/// - [`DxtCompressError::InvalidCompressedLength`] if `compressed` is too short
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use dxt_compress_api::{compress_image, compute_image_error, CompressionMode, RawImage};
///
/// let mode = CompressionMode::default();
/// let image = RawImage::new(4, 4, vec![255u8; 64])?;
/// let compressed = compress_image(&image, &mode)?;
///
/// let error = compute_image_error(&image, &compressed, &mode)?;
/// assert!(error.is_lossless());
/// # Ok(())
/// # }
/// ```
pub fn compute_image_error(
    original: &RawImage,
    compressed: &[u8],
    mode: &CompressionMode,
) -> Result<ImageError, DxtCompressError> {
    let decoded = decompress_image(compressed, original.width(), original.height(), mode)?;
    let channels = match mode.method {
        CompressionMethod::Dxt1 => 3,
        CompressionMethod::Dxt3 | CompressionMethod::Dxt5 => 4,
    };

    let mut sum_squared = 0u64;
    let mut max_channel_delta = 0u8;
    for (a, b) in original
        .pixels()
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(decoded.pixels().chunks_exact(BYTES_PER_PIXEL))
    {
        for channel in 0..channels {
            let delta = a[channel].abs_diff(b[channel]);
            sum_squared += u64::from(delta) * u64::from(delta);
            max_channel_delta = max_channel_delta.max(delta);
        }
    }

    let samples = (original.width() * original.height() * channels) as f64;
    Ok(ImageError {
        rms: (sum_squared as f64 / samples).sqrt(),
        max_channel_delta,
    })
}

#[cfg(test)]
mod tests {
    use crate::test_prelude::*;

    #[test]
    fn dxt1_ignores_alpha() {
        // Half transparent pixels decode as opaque, which DXT1 does not count.
        let image = RawImage::new(4, 4, [0u8, 0, 255, 128].repeat(16)).unwrap();
        let mode = CompressionMode::default();
        let compressed = compress_image(&image, &mode).unwrap();

        let error = compute_image_error(&image, &compressed, &mode).unwrap();
        assert!(error.is_lossless());
        assert_eq!(error.rms, 0.0);
    }

    #[test]
    fn dxt3_counts_alpha() {
        // 128 quantises to 8/15, which decodes to 136.
        let image = RawImage::new(4, 4, [0u8, 0, 255, 128].repeat(16)).unwrap();
        let mode = CompressionModeBuilder::new().method(CompressionMethod::Dxt3).build();
        let compressed = compress_image(&image, &mode).unwrap();

        let error = compute_image_error(&image, &compressed, &mode).unwrap();
        assert_eq!(error.max_channel_delta, 8);
        assert_eq!(error.rms, 4.0);
    }

    #[test]
    fn truncated_input_is_rejected() {
        let image = RawImage::new_zeroed(8, 8).unwrap();
        let mode = CompressionMode::default();
        assert_eq!(
            compute_image_error(&image, &[0; 24], &mode),
            Err(DxtCompressError::InvalidCompressedLength {
                expected: 32,
                actual: 24
            })
        );
    }
}
