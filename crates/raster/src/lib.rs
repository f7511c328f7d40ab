//! Pixel buffers and conversions for the sighting console.
//!
//! Everything that leaves this crate for display is packed RGB8 in row-major
//! order, 3 bytes per pixel.

pub mod error;
pub mod image;
pub mod pixelformat;
pub mod rgb;
pub mod scale;

pub use error::ImageError;
pub use image::Image;
pub use pixelformat::{PixelFormat, fourcc_to_string};
pub use rgb::{bgr_to_rgb, jpeg_to_rgb, rgb_to_u32, yuyv_to_rgb};
pub use scale::{fit_size, resize_rgb};

/// Convert any supported image into an RGB8 image.
///
/// # Errors
///
/// Returns `ImageError::Size` if the buffer does not match the declared
/// size and format, and `ImageError::Decode` if a JPEG payload is invalid.
pub fn into_rgb(image: Image) -> Result<Image, ImageError> {
    match image.format {
        PixelFormat::Jpeg => jpeg_to_rgb(&image),
        PixelFormat::Rgb8 => {
            image.check_len()?;
            Ok(image)
        }
        PixelFormat::Bgr8 => {
            image.check_len()?;
            Ok(Image::new(image.size, bgr_to_rgb(&image.data), PixelFormat::Rgb8))
        }
        PixelFormat::Yuyv => {
            image.check_len()?;
            Ok(Image::new(
                image.size,
                yuyv_to_rgb(image.size, &image.data),
                PixelFormat::Rgb8,
            ))
        }
    }
}
