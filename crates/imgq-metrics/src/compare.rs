use std::path::Path;

use imgq_image::Image;

use crate::{error::QualityError, loader::ImageLoader, metrics, similarity::SimilarityProvider};

/// The quality of one image measured against a reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityReport {
    /// Peak signal-to-noise ratio in decibels.
    pub psnr: f64,
    /// Structural similarity as reported by the [`SimilarityProvider`].
    pub ssim: f64,
}

impl std::fmt::Display for QualityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "PSNR: {} db", self.psnr)?;
        write!(f, "SSIM: {} db", self.ssim)
    }
}

/// Compare two images and report their PSNR and SSIM.
///
/// The sizes are checked before the provider is invoked, so a provider never
/// sees mismatched images.
///
/// # Arguments
///
/// * `image1` - The reference image with shape (H, W, C).
/// * `image2` - The image to measure with shape (H, W, C).
/// * `provider` - The source of the SSIM score.
///
/// # Errors
///
/// Returns [`QualityError::Image`] if the sizes differ and
/// [`QualityError::Similarity`] if the provider fails.
pub fn compare<T, P, const C: usize>(
    image1: &Image<T, C>,
    image2: &Image<T, C>,
    provider: &P,
) -> Result<QualityReport, QualityError>
where
    T: Copy + Into<f64>,
    P: SimilarityProvider<T, C>,
{
    let psnr = metrics::psnr(image1, image2)?;

    let ssim = provider
        .similarity(image1, image2)
        .map_err(|e| QualityError::Similarity(Box::new(e)))?;

    Ok(QualityReport { psnr, ssim })
}

/// Load two images through `loader` and compare them.
///
/// # Arguments
///
/// * `loader` - Reads the images from disk (or any other store).
/// * `provider` - The source of the SSIM score.
/// * `path1` - Location of the reference image.
/// * `path2` - Location of the image to measure.
///
/// # Errors
///
/// Returns [`QualityError::Load`] naming the first path that fails to load,
/// otherwise any error from [`compare`].
pub fn compare_files<T, L, P, const C: usize>(
    loader: &L,
    provider: &P,
    path1: impl AsRef<Path>,
    path2: impl AsRef<Path>,
) -> Result<QualityReport, QualityError>
where
    T: Copy + Into<f64>,
    L: ImageLoader<T, C>,
    P: SimilarityProvider<T, C>,
{
    let (path1, path2) = (path1.as_ref(), path2.as_ref());
    log::info!("Comparing {} against {}", path2.display(), path1.display());

    let image1 = load(loader, path1)?;
    let image2 = load(loader, path2)?;

    let report = compare(&image1, &image2, provider)?;
    log::debug!("{report:?}");

    Ok(report)
}

fn load<T, L, const C: usize>(loader: &L, path: &Path) -> Result<Image<T, C>, QualityError>
where
    L: ImageLoader<T, C>,
{
    loader.load(path).map_err(|e| QualityError::Load {
        path: path.to_path_buf(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        path::{Path, PathBuf},
    };

    use imgq_image::{Image, ImageError, ImageSize};

    use crate::{ImageLoader, QualityError, QualityReport, SimilarityProvider};

    #[derive(thiserror::Error, Debug)]
    #[error("provider unavailable")]
    struct Unavailable;

    struct Fixed(f64);

    impl<const C: usize> SimilarityProvider<u8, C> for Fixed {
        type Error = Unavailable;

        fn similarity(&self, _: &Image<u8, C>, _: &Image<u8, C>) -> Result<f64, Self::Error> {
            Ok(self.0)
        }
    }

    struct Failing;

    impl<const C: usize> SimilarityProvider<u8, C> for Failing {
        type Error = Unavailable;

        fn similarity(&self, _: &Image<u8, C>, _: &Image<u8, C>) -> Result<f64, Self::Error> {
            Err(Unavailable)
        }
    }

    struct InMemory(HashMap<PathBuf, Image<u8, 1>>);

    impl ImageLoader<u8, 1> for InMemory {
        type Error = std::io::Error;

        fn load(&self, path: &Path) -> Result<Image<u8, 1>, Self::Error> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| std::io::Error::from(std::io::ErrorKind::NotFound))
        }
    }

    fn gray(width: usize, height: usize, val: u8) -> Result<Image<u8, 1>, ImageError> {
        Image::from_size_val(ImageSize { width, height }, val)
    }

    #[test]
    fn test_compare() -> Result<(), QualityError> {
        let image1 = gray(2, 2, 0)?;
        let image2 = gray(2, 2, 255)?;

        let report = super::compare(&image1, &image2, &Fixed(0.25))?;
        assert_eq!(
            report,
            QualityReport {
                psnr: 0.0,
                ssim: 0.25
            }
        );

        Ok(())
    }

    #[test]
    fn test_compare_size_mismatch() -> Result<(), QualityError> {
        let image1 = gray(2, 2, 0)?;
        let image2 = gray(3, 3, 0)?;

        // the failing provider must not be reached
        let res = super::compare(&image1, &image2, &Failing);
        assert!(matches!(
            res,
            Err(QualityError::Image(ImageError::InvalidImageSize(2, 2, 3, 3)))
        ));

        Ok(())
    }

    #[test]
    fn test_compare_provider_error() -> Result<(), QualityError> {
        let image = gray(2, 2, 0)?;

        match super::compare(&image, &image, &Failing) {
            Err(QualityError::Similarity(source)) => {
                assert_eq!(source.to_string(), "provider unavailable")
            }
            res => panic!("expected a similarity error, got {res:?}"),
        }

        Ok(())
    }

    #[test]
    fn test_compare_files() -> Result<(), QualityError> {
        let _ = env_logger::builder().is_test(true).try_init();

        let loader = InMemory(HashMap::from([
            (PathBuf::from("man-1.png"), gray(2, 2, 100)?),
            (PathBuf::from("man-2.png"), gray(2, 2, 100)?),
        ]));

        let report = super::compare_files::<u8, _, _, 1>(
            &loader,
            &Fixed(1.0),
            "man-1.png",
            "man-2.png",
        )?;
        assert_eq!(report.psnr, 100.0);
        assert_eq!(report.ssim, 1.0);

        Ok(())
    }

    #[test]
    fn test_compare_files_missing() -> Result<(), QualityError> {
        let loader = InMemory(HashMap::from([(PathBuf::from("a.png"), gray(2, 2, 0)?)]));

        let res = super::compare_files::<u8, _, _, 1>(&loader, &Fixed(1.0), "a.png", "missing.png");
        match res {
            Err(QualityError::Load { path, .. }) => {
                assert_eq!(path, PathBuf::from("missing.png"))
            }
            res => panic!("expected a load error, got {res:?}"),
        }

        Ok(())
    }

    #[test]
    fn test_report_display() {
        let report = QualityReport {
            psnr: 48.5,
            ssim: 0.75,
        };
        assert_eq!(report.to_string(), "PSNR: 48.5 db\nSSIM: 0.75 db");
    }
}
