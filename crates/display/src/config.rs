use {
    base::Vec2,
    embedded_graphics::mono_font::{
        MonoFont,
        ascii::{FONT_5X8, FONT_6X10, FONT_9X15, FONT_9X15_BOLD, FONT_10X20},
    },
};

/// The two supported console screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenSize {
    TenInch,
    SevenInch,
}

/// Bitmap font choices for overlay and widget text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Tiny,
    Small,
    Medium,
    MediumBold,
    Large,
}

impl FontSize {
    pub fn font(self) -> &'static MonoFont<'static> {
        match self {
            FontSize::Tiny => &FONT_5X8,
            FontSize::Small => &FONT_6X10,
            FontSize::Medium => &FONT_9X15,
            FontSize::MediumBold => &FONT_9X15_BOLD,
            FontSize::Large => &FONT_10X20,
        }
    }
}

/// Mil ruler parameters. Constant for the lifetime of a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct MilScaleConfig {
    /// Horizontal field of view in mils; panel width maps onto this.
    pub fov_mil: f32,
    pub major_spacing: i32,
    pub minor_spacing: i32,
    pub label_spacing: i32,
    /// Ticks are generated for offsets in `-range..=range`.
    pub range: i32,
    pub major_tick_length: i32,
    pub minor_tick_length: i32,
    /// Label text origin relative to the tick top: `(x - offset.x, major + offset.y)`.
    pub label_offset: Vec2<i32>,
    pub label_font: FontSize,
}

impl MilScaleConfig {
    pub fn ten_inch() -> Self {
        Self {
            fov_mil: 349.0,
            major_spacing: 10,
            minor_spacing: 1,
            label_spacing: 50,
            range: 200,
            major_tick_length: 10,
            minor_tick_length: 5,
            label_offset: Vec2::new(15, 15),
            label_font: FontSize::Small,
        }
    }

    pub fn seven_inch() -> Self {
        Self {
            major_tick_length: 8,
            minor_tick_length: 4,
            label_offset: Vec2::new(12, 12),
            ..Self::ten_inch()
        }
    }
}

/// Crosshair sizing. Lengths are half-lengths: each arm reaches this far
/// from the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosshairConfig {
    pub default_half_length: i32,
    pub min_half_length: i32,
    pub max_half_length: i32,
    pub stroke_width: i32,
}

impl CrosshairConfig {
    pub fn ten_inch() -> Self {
        Self {
            default_half_length: 30,
            min_half_length: 15,
            max_half_length: 45,
            stroke_width: 3,
        }
    }

    pub fn seven_inch() -> Self {
        Self {
            default_half_length: 20,
            min_half_length: 10,
            max_half_length: 30,
            stroke_width: 3,
        }
    }
}

/// Everything the overlay renderer needs to know about a screen size.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    pub mil_scale: MilScaleConfig,
    pub crosshair: CrosshairConfig,
    pub banner_font: FontSize,
}

impl OverlayConfig {
    pub fn ten_inch() -> Self {
        Self {
            mil_scale: MilScaleConfig::ten_inch(),
            crosshair: CrosshairConfig::ten_inch(),
            banner_font: FontSize::Large,
        }
    }

    pub fn seven_inch() -> Self {
        Self {
            mil_scale: MilScaleConfig::seven_inch(),
            crosshair: CrosshairConfig::seven_inch(),
            banner_font: FontSize::Medium,
        }
    }

    pub fn for_screen(screen: ScreenSize) -> Self {
        match screen {
            ScreenSize::TenInch => Self::ten_inch(),
            ScreenSize::SevenInch => Self::seven_inch(),
        }
    }
}

/// Placement of the rows inside a readout block, relative to its frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadoutLayout {
    /// Offset of the first label box from the frame origin.
    pub inset: Vec2<i32>,
    pub label_width: i32,
    pub value_width: i32,
    pub gap: i32,
    pub row_height: i32,
    /// Distance between the tops of consecutive rows.
    pub row_pitch: i32,
    pub corner_radius: u32,
    pub font: FontSize,
}

impl ReadoutLayout {
    pub fn ten_inch() -> Self {
        Self {
            inset: Vec2::new(20, 20),
            label_width: 101,
            value_width: 120,
            gap: 10,
            row_height: 40,
            row_pitch: 50,
            corner_radius: 20,
            font: FontSize::Large,
        }
    }

    pub fn seven_inch() -> Self {
        Self {
            inset: Vec2::new(10, 5),
            label_width: 70,
            value_width: 70,
            gap: 10,
            row_height: 30,
            row_pitch: 30,
            corner_radius: 12,
            font: FontSize::MediumBold,
        }
    }

    pub fn for_screen(screen: ScreenSize) -> Self {
        match screen {
            ScreenSize::TenInch => Self::ten_inch(),
            ScreenSize::SevenInch => Self::seven_inch(),
        }
    }
}
