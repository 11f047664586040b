use std::path::PathBuf;

use imgq_image::ImageError;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error type for comparing two images.
#[derive(thiserror::Error, Debug)]
pub enum QualityError {
    /// The images could not be measured, e.g. their sizes differ.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The image loader failed for the given path.
    #[error("Failed to load image {}", path.display())]
    Load {
        /// Path passed to the loader.
        path: PathBuf,
        /// Error reported by the loader.
        #[source]
        source: BoxError,
    },

    /// The similarity provider failed.
    #[error("Failed to compute the structural similarity")]
    Similarity(#[source] BoxError),
}
