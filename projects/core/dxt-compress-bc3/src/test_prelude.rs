//! Common test imports and utilities for BC3 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::alpha::*;
pub use crate::{compress_bc3_block, decompress_bc3_block, BC3_BLOCK_SIZE};
pub use dxt_compress_bc1::colour_fit::ColourCompressSettings;

// Common types from dxt_compress_common
pub use dxt_compress_common::color_8888::Color8888;

/// A narrow linear gradient with smoothly varying alpha.
pub(crate) fn gradient_block() -> [Color8888; 16] {
    core::array::from_fn(|i| {
        let i = i as u8;
        Color8888::new(i, 100 + i, 200 - i, i * 17)
    })
}
