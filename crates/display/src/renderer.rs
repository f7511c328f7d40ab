use {
    crate::*,
    base::{Rect, Vec2},
    raster::{fit_size, resize_rgb},
};

/// Draws the video panel: scaled frame or error banner, crosshair and mil
/// ruler. Holds only its configuration, so the output depends on nothing but
/// the state and canvas passed in.
#[derive(Debug, Clone)]
pub struct OverlayRenderer {
    config: OverlayConfig,
}

impl OverlayRenderer {
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Draw `state` over the whole canvas. Returns the crosshair placement
    /// the ruler was centered on.
    pub fn render(&self, state: &PanelState, canvas: &mut Canvas) -> Crosshair {
        let palette = state.mode.palette();

        canvas.fill(mode::BLACK);
        match &state.display {
            DisplayState::Frame(frame) => self.draw_frame(frame, palette, canvas),
            DisplayState::Error(error) => {
                let center = (canvas.size() / 2).as_i32();
                canvas.draw_text_centered(
                    &error.banner(),
                    center,
                    self.config.banner_font,
                    palette.alert,
                );
            }
            DisplayState::Empty => {}
        }

        let crosshair = geometry::crosshair(
            canvas.size(),
            state.last_frame_size,
            state.bounding_box,
            &self.config.crosshair,
        );
        self.draw_crosshair(&crosshair, palette.alert, canvas);
        self.draw_ruler(crosshair.anchor.x, palette.alert, canvas);
        crosshair
    }

    fn draw_frame(&self, frame: &video::Frame, palette: Palette, canvas: &mut Canvas) {
        let fitted = fit_size(frame.size(), canvas.size());
        if fitted.area() == 0 {
            return;
        }
        canvas.fill(palette.background);
        let origin = (canvas.size().as_i32() - fitted.as_i32()) / 2;
        if fitted == frame.size() {
            canvas.blit(origin, fitted, frame.data());
            return;
        }
        match resize_rgb(frame.size(), frame.data(), fitted) {
            Ok(scaled) => canvas.blit(origin, fitted, &scaled),
            Err(error) => log::warn!("overlay: cannot scale frame: {}", error),
        }
    }

    fn draw_crosshair(&self, crosshair: &Crosshair, color: Rgb, canvas: &mut Canvas) {
        let center = crosshair.pixel();
        let half = crosshair.half_length;
        let stroke = self.config.crosshair.stroke_width.max(1);
        let near = stroke / 2;
        canvas.fill_rect(
            Rect::new(
                Vec2::new(center.x - half, center.y - near),
                Vec2::new(2 * half + 1, stroke),
            ),
            color,
        );
        canvas.fill_rect(
            Rect::new(
                Vec2::new(center.x - near, center.y - half),
                Vec2::new(stroke, 2 * half + 1),
            ),
            color,
        );
    }

    fn draw_ruler(&self, anchor_x: f32, color: Rgb, canvas: &mut Canvas) {
        let scale = &self.config.mil_scale;
        for tick in mil_ticks(anchor_x, canvas.width(), scale) {
            canvas.draw_line(Vec2::new(tick.x, 0), Vec2::new(tick.x, tick.length(scale)), color);
            if tick.labeled {
                canvas.draw_text(
                    &tick.offset.to_string(),
                    Vec2::new(
                        tick.x - scale.label_offset.x,
                        scale.major_tick_length + scale.label_offset.y,
                    ),
                    scale.label_font,
                    color,
                );
            }
        }
    }
}
