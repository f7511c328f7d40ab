use {
    crate::*,
    base::Vec2,
};

/// A raw image as delivered by a capture backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// Verify the buffer holds exactly one image of the declared size.
    ///
    /// Compressed formats have no fixed length and always pass.
    pub fn check_len(&self) -> Result<(), ImageError> {
        match self.format.frame_len(self.size) {
            Some(expected) if expected != self.data.len() => Err(ImageError::Size {
                expected,
                got: self.data.len(),
            }),
            _ => Ok(()),
        }
    }
}
