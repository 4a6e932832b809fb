//! Error types for compression and decompression operations.

use thiserror::Error;

/// Errors that can occur while compressing or decompressing images.
///
/// All inputs are validated before any block is processed, so an error never leaves
/// partially written output behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DxtCompressError {
    /// The image has a zero dimension, or its size does not fit in memory.
    #[error("Invalid image dimensions: {width}x{height}.")]
    InvalidDimensions {
        /// The width in pixels
        width: usize,
        /// The height in pixels
        height: usize,
    },

    /// The RGBA pixel buffer does not match the image dimensions.
    #[error("Invalid input length: expected {expected} bytes (width * height * 4), got {actual} bytes.")]
    InvalidInputLength {
        /// The required size in bytes
        expected: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The compressed buffer is too short for the image dimensions.
    #[error("Invalid compressed length: expected at least {expected} bytes, got {actual} bytes.")]
    InvalidCompressedLength {
        /// The required size in bytes
        expected: usize,
        /// The actual size in bytes
        actual: usize,
    },

    /// The output buffer is too small for the operation.
    #[error("Output buffer too small: need {needed} bytes, but only {actual} bytes available.")]
    OutputBufferTooSmall {
        /// The required size in bytes
        needed: usize,
        /// The actual size in bytes
        actual: usize,
    },
}
