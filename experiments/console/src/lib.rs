pub mod args;
pub mod layout;
pub mod schedule;
pub mod screen;
pub mod telemetry;

pub use args::{Args, ModeArg, Screen};
pub use layout::ScreenLayout;
pub use schedule::{DayNightSchedule, is_day_hour};
pub use screen::Console;
pub use telemetry::{BoxRanges, Reading, SimulatedTelemetry};
