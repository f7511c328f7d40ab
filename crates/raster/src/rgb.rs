use {
    crate::{pixelformat::yuv_to_rgb, *},
    base::Vec2,
};

/// Convert packed YUYV 4:2:2 to RGB8.
///
/// Each 4-byte group `[Y0, U, Y1, V]` yields two pixels sharing U and V.
pub fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(size.area() * 3);

    for chunk in data.chunks_exact(4) {
        let (r0, g0, b0) = yuv_to_rgb(chunk[0], chunk[1], chunk[3]);
        let (r1, g1, b1) = yuv_to_rgb(chunk[2], chunk[1], chunk[3]);
        rgb.extend_from_slice(&[r0, g0, b0, r1, g1, b1]);
    }

    rgb
}

/// Swap the red and blue channels of a packed BGR8 buffer.
pub fn bgr_to_rgb(data: &[u8]) -> Vec<u8> {
    data.chunks_exact(3)
        .flat_map(|c| [c[2], c[1], c[0]])
        .collect()
}

pub fn jpeg_to_rgb(image: &Image) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Jpeg)?;
    let decoded = crates_image::load_from_memory_with_format(
        &image.data,
        crates_image::ImageFormat::Jpeg,
    )
    .map_err(|e| ImageError::Decode(format!("Failed to decode JPEG: {}", e)))?;

    let rgb_image = decoded.to_rgb8();
    let (width, height) = rgb_image.dimensions();
    let size = Vec2::new(width as usize, height as usize);

    Ok(Image::new(size, rgb_image.into_raw(), PixelFormat::Rgb8))
}

/// Pack RGB8 into `0x00RRGGBB` words, the layout minifb expects.
pub fn rgb_to_u32(size: Vec2<usize>, data: &[u8]) -> Vec<u32> {
    data.chunks_exact(3)
        .take(size.area())
        .map(|c| ((c[0] as u32) << 16) | ((c[1] as u32) << 8) | c[2] as u32)
        .collect()
}
