#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the comparison driver.
pub mod error;

/// image quality metrics module.
pub mod metrics;

/// external similarity provider interface.
pub mod similarity;

/// image loading interface.
pub mod loader;

/// compare two images and collect a quality report.
pub mod compare;

pub use crate::compare::{compare, compare_files, QualityReport};
pub use crate::error::QualityError;
pub use crate::loader::ImageLoader;
pub use crate::similarity::SimilarityProvider;
