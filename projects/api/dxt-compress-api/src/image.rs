//! Uncompressed RGBA8 images.

use crate::error::DxtCompressError;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Returns the size in bytes of a `width` x `height` RGBA8 image.
///
/// # Errors
///
/// - [`DxtCompressError::InvalidDimensions`] if either dimension is zero or the size overflows
pub(crate) fn rgba_len(width: usize, height: usize) -> Result<usize, DxtCompressError> {
    if width == 0 || height == 0 {
        return Err(DxtCompressError::InvalidDimensions { width, height });
    }

    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or(DxtCompressError::InvalidDimensions { width, height })
}

/// An uncompressed image of interleaved R, G, B, A bytes, stored row-major.
///
/// The pixel buffer is always exactly `width * height * 4` bytes long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawImage {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RawImage {
    /// Wraps an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// - [`DxtCompressError::InvalidDimensions`] if either dimension is zero or the size overflows
    /// - [`DxtCompressError::InvalidInputLength`] if `pixels` is not `width * height * 4` bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use dxt_compress_api::{DxtCompressError, RawImage};
    ///
    /// assert!(RawImage::new(2, 2, vec![0; 16]).is_ok());
    /// assert_eq!(
    ///     RawImage::new(2, 2, vec![0; 15]),
    ///     Err(DxtCompressError::InvalidInputLength { expected: 16, actual: 15 })
    /// );
    /// ```
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, DxtCompressError> {
        let expected = rgba_len(width, height)?;
        if pixels.len() != expected {
            return Err(DxtCompressError::InvalidInputLength {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a fully transparent black image.
    ///
    /// # Errors
    ///
    /// - [`DxtCompressError::InvalidDimensions`] if either dimension is zero or the size overflows
    pub fn new_zeroed(width: usize, height: usize) -> Result<Self, DxtCompressError> {
        let len = rgba_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The RGBA bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// The RGBA bytes, mutably. The length cannot change.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// The RGBA value of the pixel at `(x, y)`, or `None` if out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let offset = (y * self.width + x) * BYTES_PER_PIXEL;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + BYTES_PER_PIXEL]);
        Some(rgba)
    }

    /// Consumes the image, returning the RGBA bytes.
    #[inline]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}
