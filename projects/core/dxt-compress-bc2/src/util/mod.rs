//! Block decoding utilities.

mod bc2_decode;
pub use bc2_decode::*;
