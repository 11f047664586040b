//! Image quality metrics.
//!
//! # Available Metrics
//!
//! - **MSE** (Mean Squared Error): Average squared difference between samples
//! - **PSNR** (Peak Signal-to-Noise Ratio): Quality metric in dB scale for 8-bit images
//!
//! # Examples
//!
//! ```
//! use imgq_image::{Image, ImageSize};
//! use imgq_metrics::metrics::{mse, psnr, PSNR_IDENTICAL};
//!
//! let size = ImageSize { width: 2, height: 2 };
//! let image1 = Image::<u8, 1>::from_size_val(size, 100).unwrap();
//! let image2 = Image::<u8, 1>::from_size_val(size, 101).unwrap();
//!
//! assert_eq!(mse(&image1, &image2).unwrap(), 1.0);
//! assert_eq!(psnr(&image1, &image1).unwrap(), PSNR_IDENTICAL);
//! ```

mod mse;

pub use mse::{mse, psnr, PSNR_IDENTICAL, PSNR_PEAK};
