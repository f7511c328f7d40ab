//! Video panel rendering for the sighting console: the overlay renderer,
//! the panel that owns its state, and the gauge and readout widgets drawn
//! next to it.

pub mod bbox;
pub mod canvas;
pub mod config;
pub mod gauge;
pub mod geometry;
pub mod mode;
pub mod panel;
pub mod readout;
pub mod renderer;

pub use bbox::BoundingBox;
pub use canvas::Canvas;
pub use config::{CrosshairConfig, FontSize, MilScaleConfig, OverlayConfig, ReadoutLayout, ScreenSize};
pub use gauge::{AzimuthGauge, ElevationGauge, needle_end};
pub use geometry::{Crosshair, MilTick, TickKind, crosshair, mil_ticks};
pub use mode::{DisplayMode, Palette, Rgb};
pub use panel::{DisplayPanel, DisplayState, PanelState};
pub use readout::{ReadoutBlock, Readings, format_value};
pub use renderer::OverlayRenderer;
