use {
    base::{Rect, Vec2},
    display::{FontSize, OverlayConfig, ReadoutLayout, ScreenSize},
};

fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect<i32> {
    Rect::new(Vec2::new(x, y), Vec2::new(w, h))
}

/// Window geometry for one screen size. All rects are window pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLayout {
    pub screen: ScreenSize,
    pub window: Vec2<usize>,
    /// Outer video frame; the panel sits inside its border.
    pub video_frame: Rect<i32>,
    pub frame_border: i32,
    pub elevation_gauge: Rect<i32>,
    pub elevation_caption: Rect<i32>,
    pub azimuth_gauge: Rect<i32>,
    pub azimuth_caption: Rect<i32>,
    pub readout: Rect<i32>,
    pub caption_font: FontSize,
    pub overlay: OverlayConfig,
    pub readout_layout: ReadoutLayout,
}

impl ScreenLayout {
    pub fn ten_inch() -> Self {
        Self {
            screen: ScreenSize::TenInch,
            window: Vec2::new(1920, 1200),
            video_frame: rect(10, 10, 1900, 900),
            frame_border: 4,
            elevation_gauge: rect(150, 930, 124, 124),
            elevation_caption: rect(150, 1080, 124, 40),
            azimuth_gauge: rect(1646, 930, 124, 124),
            azimuth_caption: rect(1646, 1080, 124, 40),
            readout: rect(824, 920, 271, 160),
            caption_font: FontSize::Large,
            overlay: OverlayConfig::ten_inch(),
            readout_layout: ReadoutLayout::ten_inch(),
        }
    }

    pub fn seven_inch() -> Self {
        Self {
            screen: ScreenSize::SevenInch,
            window: Vec2::new(800, 480),
            video_frame: rect(10, 10, 780, 300),
            frame_border: 4,
            elevation_gauge: rect(50, 340, 80, 80),
            elevation_caption: rect(50, 425, 80, 25),
            azimuth_gauge: rect(670, 340, 80, 80),
            azimuth_caption: rect(670, 425, 80, 25),
            readout: rect(310, 330, 180, 100),
            caption_font: FontSize::Small,
            overlay: OverlayConfig::seven_inch(),
            readout_layout: ReadoutLayout::seven_inch(),
        }
    }

    pub fn for_screen(screen: ScreenSize) -> Self {
        match screen {
            ScreenSize::TenInch => Self::ten_inch(),
            ScreenSize::SevenInch => Self::seven_inch(),
        }
    }

    /// The video panel: the frame minus its border.
    pub fn video_panel(&self) -> Rect<i32> {
        self.video_frame.inset(self.frame_border)
    }

    pub fn panel_size(&self) -> Vec2<usize> {
        let size = self.video_panel().size;
        Vec2::new(size.x.max(0) as usize, size.y.max(0) as usize)
    }
}
