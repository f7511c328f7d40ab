use {
    crate::*,
    base::Rect,
    display::{
        AzimuthGauge, Canvas, DisplayMode, DisplayPanel, ElevationGauge, Palette, ReadoutBlock,
        Readings,
    },
};

const ELEVATION_CAPTION: &str = "Elevation";
const AZIMUTH_CAPTION: &str = "Azimuth";

/// Initial values shown before the first telemetry update.
const INITIAL_READINGS: Readings = Readings {
    distance: 50.0,
    elevation: 45.0,
    azimuth: 39.0,
};

/// The whole console window: video panel, gauges and readouts.
pub struct Console {
    layout: ScreenLayout,
    panel: DisplayPanel,
    elevation: ElevationGauge,
    azimuth: AzimuthGauge,
    readout: ReadoutBlock,
    readings: Readings,
    mode: DisplayMode,
    screen: Canvas,
    video: Canvas,
}

impl Console {
    pub fn new(layout: ScreenLayout, panel: DisplayPanel) -> Self {
        let screen = Canvas::new(layout.window);
        let video = panel.canvas();
        let readout = ReadoutBlock::new(layout.readout_layout.clone());
        Self {
            elevation: ElevationGauge::new(INITIAL_READINGS.elevation as f32),
            azimuth: AzimuthGauge::new(INITIAL_READINGS.azimuth as f32),
            readings: INITIAL_READINGS,
            mode: panel.mode(),
            layout,
            panel,
            readout,
            screen,
            video,
        }
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn panel(&self) -> &DisplayPanel {
        &self.panel
    }

    pub fn readings(&self) -> Readings {
        self.readings
    }

    pub fn elevation(&self) -> &ElevationGauge {
        &self.elevation
    }

    pub fn azimuth(&self) -> &AzimuthGauge {
        &self.azimuth
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Push one telemetry update to the gauges, readouts and video panel.
    pub fn apply_reading(&mut self, reading: &Reading) {
        self.readings = reading.readings;
        self.elevation.set_angle(reading.readings.elevation as f32);
        self.azimuth.set_angle(reading.readings.azimuth as f32);
        self.panel.set_bounding_box(reading.bounding_box);
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.panel.set_display_mode(mode);
    }

    fn draw_caption(&mut self, area: Rect<i32>, text: &str, palette: Palette) {
        self.screen.fill_rect(area, palette.background);
        self.screen.stroke_rect(area, 2, palette.border);
        self.screen
            .draw_text_centered(text, area.center(), self.layout.caption_font, palette.text);
    }

    /// Redraw the full window.
    pub fn compose(&mut self) -> &Canvas {
        let palette = self.mode.palette();
        self.screen.fill(palette.background);

        let frame = self.layout.video_frame;
        self.screen.stroke_rect(frame, self.layout.frame_border, palette.accent);
        self.panel.render(&mut self.video);
        self.screen
            .draw_canvas(self.layout.video_panel().origin, &self.video);

        self.elevation
            .draw(&mut self.screen, self.layout.elevation_gauge, palette);
        self.azimuth
            .draw(&mut self.screen, self.layout.azimuth_gauge, palette);
        self.draw_caption(self.layout.elevation_caption, ELEVATION_CAPTION, palette);
        self.draw_caption(self.layout.azimuth_caption, AZIMUTH_CAPTION, palette);

        self.readout
            .draw(&mut self.screen, self.layout.readout, &self.readings, palette);
        &self.screen
    }

    /// The last composed window as `0x00RRGGBB` pixels.
    pub fn buffer(&self) -> Vec<u32> {
        self.screen.to_u32()
    }

    pub fn close(&self) {
        self.panel.close();
    }
}
