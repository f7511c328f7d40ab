//! Frame capture for the sighting console.
//!
//! A `FrameCaptureLoop` owns a `FrameSource` on a background thread and
//! publishes every read as a `CaptureResult` into a single-slot,
//! latest-wins channel (`FrameSender` / `FrameReceiver`).

pub mod capture;
pub mod config;
pub mod error;
pub mod frame;
pub mod pattern;
pub mod slot;
pub mod source;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use capture::FrameCaptureLoop;
pub use config::{CaptureConfig, VideoSource};
pub use error::CaptureError;
pub use frame::{CaptureResult, Frame};
pub use pattern::TestPattern;
pub use slot::{FrameReceiver, FrameSender, latest_slot};
pub use source::{FrameSource, open_source};

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Source;
