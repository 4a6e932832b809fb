#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

/// Interpolated 3-bit alpha
pub mod alpha;
/// Block decoding utilities
pub mod util;

mod block;
pub use block::*;

/// Common test prelude for avoiding duplicate imports in test modules
#[cfg(test)]
pub(crate) mod test_prelude;
