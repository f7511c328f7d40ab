use {
    crate::*,
    base::Vec2,
    raster::{Image, PixelFormat},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

enum Target {
    Index(usize),
    Path(std::path::PathBuf),
}

/// V4L2 capture device delivering YUYV or MJPEG frames.
pub struct V4l2Source {
    target: Target,
    requested_size: Option<Vec2<usize>>,
    requested_format: Option<PixelFormat>,
    buffer_count: u32,
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
}

impl V4l2Source {
    pub fn new(config: &CaptureConfig) -> Self {
        let target = match config.source() {
            VideoSource::Path(path) => Target::Path(path.clone()),
            VideoSource::Index(index) => Target::Index(*index as usize),
            // other sources never reach this backend, fall back to the first device
            _ => Target::Index(0),
        };
        Self {
            target,
            requested_size: config.size(),
            requested_format: config.format(),
            buffer_count: config.buffer_count(),
            stream: None,
            size: Vec2::zero(),
            format: PixelFormat::Yuyv,
        }
    }

    fn describe(&self) -> String {
        match &self.target {
            Target::Index(index) => format!("/dev/video{index}"),
            Target::Path(path) => path.display().to_string(),
        }
    }

    /// Negotiated frame size, zero until opened.
    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }
}

fn unavailable(device: &str, error: std::io::Error) -> CaptureError {
    CaptureError::DeviceUnavailable(format!("{device}: {error}"))
}

impl FrameSource for V4l2Source {
    fn open(&mut self) -> Result<(), CaptureError> {
        self.stream.take();
        let name = self.describe();

        let device = match &self.target {
            Target::Index(index) => Device::new(*index),
            Target::Path(path) => Device::with_path(path),
        }
        .map_err(|e| unavailable(&name, e))?;
        let device_format = Capture::format(&device).map_err(|e| unavailable(&name, e))?;

        let desired_size = self.requested_size.unwrap_or(Vec2::new(
            device_format.width as usize,
            device_format.height as usize,
        ));
        let desired_fourcc = match self.requested_format {
            Some(PixelFormat::Jpeg) => FourCC::new(b"MJPG"),
            Some(PixelFormat::Yuyv) => FourCC::new(b"YUYV"),
            _ => device_format.fourcc,
        };

        let actual_format = Capture::set_format(
            &device,
            &Format::new(desired_size.x as u32, desired_size.y as u32, desired_fourcc),
        )
        .map_err(|e| unavailable(&name, e))?;

        self.size = Vec2::new(actual_format.width as usize, actual_format.height as usize);
        self.format = match &actual_format.fourcc.repr {
            b"YUYV" => PixelFormat::Yuyv,
            b"MJPG" => PixelFormat::Jpeg,
            _ => {
                return Err(CaptureError::DeviceUnavailable(format!(
                    "{name}: unsupported pixel format {}",
                    actual_format.fourcc
                )));
            }
        };

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, self.buffer_count)
            .map_err(|e| unavailable(&name, e))?;
        self.stream = Some(stream);

        log::info!(
            "v4l2: opened {} at {}x{} {:?}",
            name,
            self.size.x,
            self.size.y,
            self.format
        );
        Ok(())
    }

    fn close(&mut self) {
        if self.stream.take().is_some() {
            log::info!("v4l2: closed {}", self.describe());
        }
    }

    fn blocking_read(&mut self) -> Result<Image, CaptureError> {
        let stream = self.stream.as_mut().ok_or(CaptureError::ReadFailed)?;
        let (buffer, metadata) = CaptureStream::next(stream).map_err(|error| {
            log::warn!("v4l2: dequeue failed: {}", error);
            CaptureError::ReadFailed
        })?;

        // drivers report the payload length, the mapped buffer can be larger
        let used = (metadata.bytesused as usize).min(buffer.len());
        let data = match self.format.frame_len(self.size) {
            Some(len) if used >= len => buffer[..len].to_vec(),
            Some(_) => return Err(CaptureError::ReadFailed),
            None => buffer[..used].to_vec(),
        };
        Ok(Image::new(self.size, data, self.format))
    }
}
