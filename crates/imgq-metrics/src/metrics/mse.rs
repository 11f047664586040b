use imgq_image::{Image, ImageError};

/// Peak sample value used as the PSNR signal reference (8-bit imagery).
pub const PSNR_PEAK: f64 = 255.0;

/// Value returned by [`psnr`] when the two images are identical.
///
/// The true PSNR of identical images is infinite; 100 dB is reported instead.
pub const PSNR_IDENTICAL: f64 = 100.0;

fn check_same_size<T, const C: usize>(
    image1: &Image<T, C>,
    image2: &Image<T, C>,
) -> Result<(), ImageError> {
    if image1.size() != image2.size() {
        return Err(ImageError::InvalidImageSize(
            image1.rows(),
            image1.cols(),
            image2.rows(),
            image2.cols(),
        ));
    }
    Ok(())
}

/// Compute the mean squared error (MSE) between two images.
///
/// The MSE is defined as:
///
/// $ MSE = \frac{1}{n} \sum_{i=1}^{n} (I_1 - I_2)^2 $
///
/// where `I_1` and `I_2` are the two images and `n` is the number of samples
/// across all rows, columns and channels.
///
/// Samples are widened to `f64` before subtracting, so unsigned inputs never wrap.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Returns
///
/// The mean squared error between the two images.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the two images have different sizes.
///
/// # Example
///
/// ```
/// use imgq_image::{Image, ImageSize};
/// use imgq_metrics::metrics::mse;
///
/// let image1 = Image::<u8, 1>::new(
///    ImageSize {
///      width: 2,
///      height: 2,
///    },
///    vec![0, 1, 2, 3],
/// )
/// .unwrap();
///
/// let image2 = Image::<u8, 1>::new(
///    ImageSize {
///      width: 2,
///      height: 2,
///    },
///    vec![0, 3, 2, 3],
/// )
/// .unwrap();
///
/// let mse = mse(&image1, &image2).unwrap();
/// assert_eq!(mse, 1.0);
/// ```
pub fn mse<T, const C: usize>(
    image1: &Image<T, C>,
    image2: &Image<T, C>,
) -> Result<f64, ImageError>
where
    T: Copy + Into<f64>,
{
    check_same_size(image1, image2)?;

    // an empty image carries no error
    if image1.numel() == 0 {
        return Ok(0.0);
    }

    let sum = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .map(|(&a, &b)| (a.into() - b.into()).powi(2))
        .sum::<f64>();

    Ok(sum / (image1.numel() as f64))
}

/// Compute the peak signal-to-noise ratio (PSNR) between two images.
///
/// The PSNR is defined as:
///
/// $ PSNR = 10 \log_{10} \left( \frac{255^2}{MSE} \right) $
///
/// where `MSE` is the mean squared error between the two images. The peak is fixed
/// at [`PSNR_PEAK`], so the inputs are expected to hold 8-bit range samples.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Returns
///
/// The PSNR in decibels, or [`PSNR_IDENTICAL`] when the MSE is exactly zero.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if the two images have different sizes.
///
/// # Example
/// ```
/// use imgq_image::{Image, ImageSize};
/// use imgq_metrics::metrics::psnr;
///
/// let size = ImageSize {
///   width: 2,
///   height: 2,
/// };
///
/// let black = Image::<u8, 1>::from_size_val(size, 0).unwrap();
/// let white = Image::<u8, 1>::from_size_val(size, 255).unwrap();
///
/// assert_eq!(psnr(&black, &white).unwrap(), 0.0);
/// assert_eq!(psnr(&black, &black).unwrap(), 100.0);
/// ```
pub fn psnr<T, const C: usize>(
    image1: &Image<T, C>,
    image2: &Image<T, C>,
) -> Result<f64, ImageError>
where
    T: Copy + Into<f64>,
{
    let mse = mse(image1, image2)?;
    log::debug!("mse: {mse}");

    if mse == 0.0 {
        return Ok(PSNR_IDENTICAL);
    }

    // stays finite for subnormal mse, where 255^2 / mse overflows
    Ok(10.0 * (PSNR_PEAK.powi(2).log10() - mse.log10()))
}
