use std::fmt;

/// A capture failure, delivered to the display in place of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The source could not be opened. Fatal to the capture loop.
    DeviceUnavailable(String),
    /// A single read produced no frame. The loop keeps going.
    ReadFailed,
    /// The source delivered something unusable.
    Stream(String),
}

impl CaptureError {
    /// Short text shown on the video panel while this error is current.
    pub fn banner(&self) -> String {
        match self {
            CaptureError::DeviceUnavailable(_) => "Camera unavailable".to_string(),
            CaptureError::ReadFailed => "Failed to read video frame".to_string(),
            CaptureError::Stream(msg) => format!("Video stream error: {msg}"),
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, CaptureError::DeviceUnavailable(_))
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::DeviceUnavailable(msg) => write!(f, "device unavailable: {msg}"),
            CaptureError::ReadFailed => write!(f, "frame read failed"),
            CaptureError::Stream(msg) => write!(f, "stream error: {msg}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<raster::ImageError> for CaptureError {
    fn from(err: raster::ImageError) -> Self {
        CaptureError::Stream(err.to_string())
    }
}
