use imgq_image::Image;

/// A source of structural similarity (SSIM) scores.
///
/// SSIM is not computed by this crate. Implementors wrap whichever SSIM
/// implementation the application depends on.
///
/// # Example
///
/// ```
/// use imgq_image::{Image, ImageSize};
/// use imgq_metrics::SimilarityProvider;
///
/// /// Scores 1.0 for identical images and 0.0 otherwise.
/// struct Exact;
///
/// impl<const C: usize> SimilarityProvider<u8, C> for Exact {
///     type Error = std::convert::Infallible;
///
///     fn similarity(&self, a: &Image<u8, C>, b: &Image<u8, C>) -> Result<f64, Self::Error> {
///         Ok(if a == b { 1.0 } else { 0.0 })
///     }
/// }
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 2, height: 2 }, 7).unwrap();
/// assert_eq!(Exact.similarity(&image, &image), Ok(1.0));
/// assert!(SimilarityProvider::<u8, 3>::multichannel(&Exact));
/// ```
pub trait SimilarityProvider<T, const C: usize> {
    /// Error returned when the score cannot be computed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Compute the similarity score between two images of the same size.
    fn similarity(
        &self,
        image1: &Image<T, C>,
        image2: &Image<T, C>,
    ) -> Result<f64, Self::Error>;

    /// Whether the images are scored as multichannel data.
    fn multichannel(&self) -> bool {
        C > 1
    }
}
