#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod block;
pub mod compress;
pub mod compression_mode_builder;
pub mod decompress;
pub mod error;
pub mod flags;
pub mod image;
pub mod image_error;
pub mod mode;

pub use block::{compress_block, compress_block_masked, decompress_block, FULL_BLOCK_MASK};
pub use compress::{compress_image, compress_image_into, storage_requirements};
pub use compression_mode_builder::CompressionModeBuilder;
pub use decompress::{decompress_image, decompress_image_into};
pub use error::DxtCompressError;
pub use flags::CompressionFlags;
pub use image::RawImage;
pub use image_error::{compute_image_error, ImageError};
pub use mode::{CompressionMethod, CompressionMode};

// Configuration types owned by the core crates.
pub use dxt_compress_bc1::colour_fit::ColourFitMode;
pub use dxt_compress_common::colour_metric::ColourMetric;

#[cfg(test)]
pub(crate) mod test_prelude;
