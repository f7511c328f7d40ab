use {
    crate::*,
    base::Vec2,
};

// fourcc codes
pub(crate) const FOURCC_RGB3: u32 = u32::from_le_bytes(*b"RGB3");
pub(crate) const FOURCC_BGR3: u32 = u32::from_le_bytes(*b"BGR3");
pub(crate) const FOURCC_YUYV: u32 = u32::from_le_bytes(*b"YUYV");
pub(crate) const FOURCC_MJPG: u32 = u32::from_le_bytes(*b"MJPG");

/// Convert a fourcc code to a readable 4-character string.
pub fn fourcc_to_string(fourcc: u32) -> String {
    String::from_utf8_lossy(&fourcc.to_le_bytes()).into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Bgr8,
    Yuyv,
    Jpeg,
}

impl PixelFormat {
    pub fn from_fourcc(fourcc: u32) -> Result<Self, ImageError> {
        match fourcc {
            FOURCC_RGB3 => Ok(PixelFormat::Rgb8),
            FOURCC_BGR3 => Ok(PixelFormat::Bgr8),
            FOURCC_YUYV => Ok(PixelFormat::Yuyv),
            FOURCC_MJPG => Ok(PixelFormat::Jpeg),
            _ => Err(ImageError::Decode(format!(
                "unsupported pixel format: {}",
                fourcc_to_string(fourcc)
            ))),
        }
    }

    pub fn as_fourcc(&self) -> u32 {
        match self {
            PixelFormat::Rgb8 => FOURCC_RGB3,
            PixelFormat::Bgr8 => FOURCC_BGR3,
            PixelFormat::Yuyv => FOURCC_YUYV,
            PixelFormat::Jpeg => FOURCC_MJPG,
        }
    }

    /// Byte length of one uncompressed frame, `None` for compressed formats.
    pub fn frame_len(&self, size: Vec2<usize>) -> Option<usize> {
        match self {
            PixelFormat::Rgb8 | PixelFormat::Bgr8 => Some(size.area() * 3),
            PixelFormat::Yuyv => Some(size.area() * 2),
            PixelFormat::Jpeg => None,
        }
    }

    pub fn ensure_format(&self, expected: PixelFormat) -> Result<(), ImageError> {
        if *self != expected {
            return Err(ImageError::Decode(format!(
                "expected {:?} format, got {:?}",
                expected, self
            )));
        }
        Ok(())
    }
}

// BT.601 YUV-to-RGB conversion for a single pixel (fixed-point, shift 8)
pub(crate) fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let y = y as i32;
    let u = u as i32 - 128;
    let v = v as i32 - 128;
    let r = (y + ((359 * v) >> 8)).clamp(0, 255) as u8;
    let g = (y - ((88 * u + 183 * v) >> 8)).clamp(0, 255) as u8;
    let b = (y + ((454 * u) >> 8)).clamp(0, 255) as u8;
    (r, g, b)
}
