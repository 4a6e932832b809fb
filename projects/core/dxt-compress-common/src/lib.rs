#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod color_565;
pub mod color_8888;
pub mod colour_metric;
pub mod colour_set;
pub mod decoded_4x4_block;
pub mod math;
