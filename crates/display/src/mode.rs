/// An RGB8 color.
pub type Rgb = [u8; 3];

pub const BLACK: Rgb = [0, 0, 0];
pub const WHITE: Rgb = [255, 255, 255];
pub const RED: Rgb = [255, 0, 0];
pub const YELLOW: Rgb = [255, 255, 0];
pub const ORANGE: Rgb = [255, 165, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Day,
    Night,
}

impl DisplayMode {
    pub fn from_day(day: bool) -> Self {
        if day { DisplayMode::Day } else { DisplayMode::Night }
    }

    pub fn is_day(self) -> bool {
        self == DisplayMode::Day
    }

    pub fn palette(self) -> Palette {
        Palette::for_mode(self)
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayMode::Day => write!(f, "day"),
            DisplayMode::Night => write!(f, "night"),
        }
    }
}

/// Colors for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub text: Rgb,
    pub alert: Rgb,
    pub label_text: Rgb,
    pub accent: Rgb,
}

impl Palette {
    pub fn for_mode(mode: DisplayMode) -> Self {
        let (background, border) = match mode {
            DisplayMode::Day => (BLACK, WHITE),
            DisplayMode::Night => (WHITE, BLACK),
        };
        Self {
            background,
            border,
            text: YELLOW,
            alert: RED,
            label_text: WHITE,
            accent: ORANGE,
        }
    }
}
