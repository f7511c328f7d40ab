use {
    crate::*,
    base::Vec2,
    raster::{Image, PixelFormat},
    std::sync::Arc,
};

/// What one iteration of the capture loop produces.
pub type CaptureResult = Result<Frame, CaptureError>;

/// An immutable RGB8 video frame.
///
/// Cloning shares the pixel buffer, so a frame can sit in the latest-frame
/// slot and in the panel state at the same time without copying.
#[derive(Clone, PartialEq)]
pub struct Frame {
    size: Vec2<usize>,
    data: Arc<[u8]>,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("size", &self.size)
            .field("data", &format_args!("<{} bytes>", self.data.len()))
            .finish()
    }
}

impl Frame {
    /// Wrap an RGB8 buffer of `size` pixels.
    ///
    /// # Errors
    ///
    /// Returns `CaptureError::Stream` if the buffer length is not
    /// `width * height * 3` or the size is empty.
    pub fn new(size: Vec2<usize>, data: Vec<u8>) -> Result<Self, CaptureError> {
        if size.area() == 0 {
            return Err(CaptureError::Stream(format!(
                "empty frame: {}x{}",
                size.x, size.y
            )));
        }
        let expected = size.area() * 3;
        if data.len() != expected {
            return Err(CaptureError::Stream(format!(
                "frame buffer is {} bytes, expected {} for {}x{}",
                data.len(),
                expected,
                size.x,
                size.y
            )));
        }
        Ok(Self {
            size,
            data: data.into(),
        })
    }

    /// Convert a raw source image into a display-ready frame.
    pub fn from_image(image: Image) -> Result<Self, CaptureError> {
        let rgb = raster::into_rgb(image)?;
        rgb.format.ensure_format(PixelFormat::Rgb8)?;
        Self::new(rgb.size, rgb.data)
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// Packed RGB8 pixels, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
