//! Common test imports and utilities for BC1 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Core functionality from this crate
pub use crate::colour_fit::{ColourCompressSettings, ColourFitMode};
pub use crate::{compress_bc1_block, decompress_bc1_block, BC1_BLOCK_SIZE};

// Common types from dxt_compress_common
pub use dxt_compress_common::color_8888::Color8888;
pub use dxt_compress_common::colour_metric::ColourMetric;

/// A narrow linear gradient, the kind of block DXT handles well.
pub(crate) fn gradient_block() -> [Color8888; 16] {
    core::array::from_fn(|i| {
        let i = i as u8;
        Color8888::new(i, 100 + i, 200 - i, 255)
    })
}
