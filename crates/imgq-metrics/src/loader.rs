use std::path::Path;

use imgq_image::Image;

/// Reads images from a path.
///
/// Decoding lives outside this crate; implementors adapt an image codec to
/// produce an [`Image`] with the requested sample type and channel count.
pub trait ImageLoader<T, const C: usize> {
    /// Error returned when the path cannot be read or decoded.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the image stored at `path`.
    fn load(&self, path: &Path) -> Result<Image<T, C>, Self::Error>;
}
