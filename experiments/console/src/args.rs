use {
    clap::{Parser, ValueEnum},
    display::{DisplayMode, ScreenSize},
    std::path::PathBuf,
    video::VideoSource,
};

#[derive(Parser, Debug)]
#[command(name = "sighting-console", about = "Video sighting console with crosshair and mil ruler")]
pub struct Args {
    /// Video source: device index, device path, `pattern`, or a stream URI
    #[arg(long, default_value = "0")]
    pub source: VideoSource,

    /// Screen layout
    #[arg(long, value_enum, default_value_t = Screen::Ten)]
    pub screen: Screen,

    /// Day/night palette; `auto` follows the local clock
    #[arg(long, value_enum, default_value_t = ModeArg::Auto)]
    pub mode: ModeArg,

    /// Telemetry refresh interval in milliseconds
    #[arg(long, default_value_t = 100)]
    pub refresh_ms: u64,

    /// Write logs to date-named files in this directory instead of stdout
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// 10-inch, 1920x1200
    Ten,
    /// 7-inch, 800x480
    Seven,
}

impl Screen {
    pub fn size(self) -> ScreenSize {
        match self {
            Screen::Ten => ScreenSize::TenInch,
            Screen::Seven => ScreenSize::SevenInch,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Auto,
    Day,
    Night,
}

impl ModeArg {
    /// The pinned mode, `None` for `auto`.
    pub fn override_mode(self) -> Option<DisplayMode> {
        match self {
            ModeArg::Auto => None,
            ModeArg::Day => Some(DisplayMode::Day),
            ModeArg::Night => Some(DisplayMode::Night),
        }
    }
}
