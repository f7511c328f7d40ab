use {
    crate::*,
    base::Vec2,
    crates_image::{RgbImage, imageops::FilterType},
};

/// Largest size with the aspect ratio of `src` that fits inside `bounds`.
///
/// Matches the usual keep-aspect-ratio rule: try full height first, fall back
/// to full width. A degenerate source fits as zero.
pub fn fit_size(src: Vec2<usize>, bounds: Vec2<usize>) -> Vec2<usize> {
    if src.x == 0 || src.y == 0 {
        return Vec2::zero();
    }
    let width_at_full_height = (bounds.y as u64 * src.x as u64 / src.y as u64) as usize;
    if width_at_full_height <= bounds.x {
        Vec2::new(width_at_full_height, bounds.y)
    } else {
        Vec2::new(bounds.x, (bounds.x as u64 * src.y as u64 / src.x as u64) as usize)
    }
}

/// Resample an RGB8 buffer to `new_size`.
///
/// # Errors
///
/// Returns `ImageError::Size` if `data` does not hold `size` pixels.
pub fn resize_rgb(
    size: Vec2<usize>,
    data: &[u8],
    new_size: Vec2<usize>,
) -> Result<Vec<u8>, ImageError> {
    let expected = size.area() * 3;
    if data.len() != expected {
        return Err(ImageError::Size {
            expected,
            got: data.len(),
        });
    }
    if size == new_size {
        return Ok(data.to_vec());
    }
    if new_size.area() == 0 || size.area() == 0 {
        return Ok(vec![0u8; new_size.area() * 3]);
    }
    let source = RgbImage::from_raw(size.x as u32, size.y as u32, data.to_vec()).ok_or(
        ImageError::Size {
            expected,
            got: data.len(),
        },
    )?;
    let resized = crates_image::imageops::resize(
        &source,
        new_size.x as u32,
        new_size.y as u32,
        FilterType::Triangle,
    );
    Ok(resized.into_raw())
}
