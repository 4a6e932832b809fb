//! Block decoding utilities.

mod bc3_decode;
pub use bc3_decode::*;
