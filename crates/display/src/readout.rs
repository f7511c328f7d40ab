use {
    crate::{canvas::to_rgb888, *},
    base::{Rect, Vec2},
    embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyleBuilder, Rectangle, RoundedRectangle},
    },
};

/// Values shown in the readout block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readings {
    pub distance: f64,
    pub elevation: f64,
    pub azimuth: f64,
}

impl Readings {
    pub fn new(distance: f64, elevation: f64, azimuth: f64) -> Self {
        Self {
            distance,
            elevation,
            azimuth,
        }
    }
}

/// Two decimals, the way the readout shows every value.
pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

const LABELS: [&str; 3] = ["Dist", "EA", "AA"];

/// Distance, elevation and azimuth rows inside a rounded frame.
#[derive(Debug, Clone)]
pub struct ReadoutBlock {
    layout: ReadoutLayout,
}

impl ReadoutBlock {
    pub fn new(layout: ReadoutLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ReadoutLayout {
        &self.layout
    }

    /// Label and formatted value for each row, top to bottom.
    pub fn rows(readings: &Readings) -> [(&'static str, String); 3] {
        [
            (LABELS[0], format_value(readings.distance)),
            (LABELS[1], format_value(readings.elevation)),
            (LABELS[2], format_value(readings.azimuth)),
        ]
    }

    pub fn label_rect(&self, area: Rect<i32>, row: usize) -> Rect<i32> {
        let l = &self.layout;
        Rect::new(
            Vec2::new(
                area.origin.x + l.inset.x,
                area.origin.y + l.inset.y + row as i32 * l.row_pitch,
            ),
            Vec2::new(l.label_width, l.row_height),
        )
    }

    pub fn value_rect(&self, area: Rect<i32>, row: usize) -> Rect<i32> {
        let label = self.label_rect(area, row);
        Rect::new(
            Vec2::new(label.max().x + self.layout.gap, label.origin.y),
            Vec2::new(self.layout.value_width, self.layout.row_height),
        )
    }

    pub fn draw(&self, canvas: &mut Canvas, area: Rect<i32>, readings: &Readings, palette: Palette) {
        let frame = area.inset(2);
        RoundedRectangle::with_equal_corners(
            Rectangle::new(
                Point::new(frame.origin.x, frame.origin.y),
                Size::new(frame.size.x as u32, frame.size.y as u32),
            ),
            Size::new(self.layout.corner_radius, self.layout.corner_radius),
        )
        .into_styled(
            PrimitiveStyleBuilder::new()
                .stroke_color(to_rgb888(palette.border))
                .stroke_width(3)
                .fill_color(to_rgb888(palette.background))
                .build(),
        )
        .draw(canvas)
        .unwrap_or_else(|never| match never {});

        for (row, (label, value)) in Self::rows(readings).iter().enumerate() {
            let label_rect = self.label_rect(area, row);
            canvas.fill_rect(label_rect, palette.alert);
            canvas.stroke_rect(label_rect, 2, palette.border);
            canvas.draw_text_centered(label, label_rect.center(), self.layout.font, palette.label_text);

            let value_rect = self.value_rect(area, row);
            canvas.fill_rect(value_rect, palette.background);
            canvas.stroke_rect(value_rect, 2, palette.border);
            canvas.draw_text_centered(value, value_rect.center(), self.layout.font, palette.text);
        }
    }
}
