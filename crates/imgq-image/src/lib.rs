#![deny(missing_docs)]
//! Image types used as inputs to the quality metrics.

/// image representation for quality measurement purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
