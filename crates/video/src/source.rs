use {crate::*, raster::Image};

/// A capture backend, driven from the capture thread only.
pub trait FrameSource: Send {
    /// Acquire the device. Called once, on the capture thread.
    fn open(&mut self) -> Result<(), CaptureError>;
    /// Release the device, if open.
    fn close(&mut self);
    /// Block until the next image arrives.
    fn blocking_read(&mut self) -> Result<Image, CaptureError>;
}

/// Stands in for sources no backend handles; never opens.
struct Unsupported {
    description: String,
}

impl FrameSource for Unsupported {
    fn open(&mut self) -> Result<(), CaptureError> {
        Err(CaptureError::DeviceUnavailable(format!(
            "no capture backend for {}",
            self.description
        )))
    }

    fn close(&mut self) {}

    fn blocking_read(&mut self) -> Result<Image, CaptureError> {
        Err(CaptureError::ReadFailed)
    }
}

/// Pick the backend for a configured source. Nothing is opened yet.
pub fn open_source(config: &CaptureConfig) -> Box<dyn FrameSource> {
    match config.source() {
        VideoSource::Pattern => Box::new(TestPattern::new(
            config.size().unwrap_or(pattern::DEFAULT_SIZE),
        )),
        #[cfg(feature = "v4l2")]
        VideoSource::Index(_) | VideoSource::Path(_) => Box::new(V4l2Source::new(config)),
        source => Box::new(Unsupported {
            description: source.to_string(),
        }),
    }
}
