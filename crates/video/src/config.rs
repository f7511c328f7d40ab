use {
    crate::*,
    base::Vec2,
    raster::PixelFormat,
    std::{path::PathBuf, str::FromStr, time::Duration},
};

// ~33 frames per second
const DEFAULT_FRAME_INTERVAL_MS: u64 = 30;

const DEFAULT_BUFFER_COUNT: u32 = 4;

/// Where frames come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// V4L2 device by index, `/dev/video{n}`.
    Index(u32),
    /// V4L2 device by path.
    Path(PathBuf),
    /// Network stream. Accepted on the command line, no backend opens it.
    Uri(String),
    /// Built-in moving test pattern.
    Pattern,
}

impl Default for VideoSource {
    fn default() -> Self {
        VideoSource::Index(0)
    }
}

impl FromStr for VideoSource {
    type Err = CaptureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CaptureError::DeviceUnavailable(
                "empty video source".to_string(),
            ));
        }
        if s.eq_ignore_ascii_case("pattern") {
            return Ok(VideoSource::Pattern);
        }
        if s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u32>()
                .map(VideoSource::Index)
                .map_err(|e| CaptureError::DeviceUnavailable(format!("{s}: {e}")));
        }
        if s.contains("://") {
            return Ok(VideoSource::Uri(s.to_string()));
        }
        Ok(VideoSource::Path(PathBuf::from(s)))
    }
}

impl std::fmt::Display for VideoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VideoSource::Index(index) => write!(f, "/dev/video{index}"),
            VideoSource::Path(path) => write!(f, "{}", path.display()),
            VideoSource::Uri(uri) => write!(f, "{uri}"),
            VideoSource::Pattern => write!(f, "test pattern"),
        }
    }
}

/// Capture settings.
///
/// `size` and `format` are requests; the device may pick something else.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    source: VideoSource,
    size: Option<Vec2<usize>>,
    format: Option<PixelFormat>,
    frame_interval: Duration,
    buffer_count: u32,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            source: VideoSource::default(),
            size: None,
            format: None,
            frame_interval: Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS),
            buffer_count: DEFAULT_BUFFER_COUNT,
        }
    }
}

impl CaptureConfig {
    pub fn with_source(mut self, source: VideoSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_size(mut self, size: Vec2<usize>) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    pub fn with_buffer_count(mut self, buffer_count: u32) -> Self {
        self.buffer_count = buffer_count;
        self
    }

    pub fn source(&self) -> &VideoSource {
        &self.source
    }

    pub fn size(&self) -> Option<Vec2<usize>> {
        self.size
    }

    pub fn format(&self) -> Option<PixelFormat> {
        self.format
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn buffer_count(&self) -> u32 {
        self.buffer_count
    }
}
