use {
    crate::*,
    base::Vec2,
    raster::{Image, PixelFormat},
};

pub(crate) const DEFAULT_SIZE: Vec2<usize> = Vec2 { x: 640, y: 480 };

// pixels the bar moves per frame
const BAR_STEP: usize = 8;

/// Synthetic BGR source: a dark gradient with a bright vertical bar that
/// sweeps left to right, one step per frame.
pub struct TestPattern {
    size: Vec2<usize>,
    frame_index: usize,
    open: bool,
}

impl TestPattern {
    pub fn new(size: Vec2<usize>) -> Self {
        Self {
            size,
            frame_index: 0,
            open: false,
        }
    }

    /// Column of the bar in frame `index`.
    pub fn bar_column(&self, index: usize) -> usize {
        if self.size.x == 0 {
            return 0;
        }
        (index * BAR_STEP) % self.size.x
    }

    fn render(&self) -> Vec<u8> {
        let bar = self.bar_column(self.frame_index);
        let mut data = Vec::with_capacity(self.size.area() * 3);
        for y in 0..self.size.y {
            let shade = (y * 96 / self.size.y.max(1)) as u8;
            for x in 0..self.size.x {
                if x.abs_diff(bar) < BAR_STEP {
                    // bgr
                    data.extend_from_slice(&[40, 220, 255]);
                } else {
                    data.extend_from_slice(&[shade, shade / 2, 16]);
                }
            }
        }
        data
    }
}

impl FrameSource for TestPattern {
    fn open(&mut self) -> Result<(), CaptureError> {
        if self.size.area() == 0 {
            return Err(CaptureError::DeviceUnavailable(
                "test pattern size is empty".to_string(),
            ));
        }
        self.frame_index = 0;
        self.open = true;
        log::info!("test pattern: opened {}x{}", self.size.x, self.size.y);
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn blocking_read(&mut self) -> Result<Image, CaptureError> {
        if !self.open {
            return Err(CaptureError::ReadFailed);
        }
        let data = self.render();
        self.frame_index = self.frame_index.wrapping_add(1);
        Ok(Image::new(self.size, data, PixelFormat::Bgr8))
    }
}
