#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use imgq_image as image;

#[doc(inline)]
pub use imgq_metrics as metrics;
