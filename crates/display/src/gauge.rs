use {
    crate::{canvas::{point, to_rgb888}, *},
    base::{Rect, Vec2},
    embedded_graphics::{
        prelude::*,
        primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder},
    },
};

/// End of a needle of `radius` pointing at `degrees`, counterclockwise from
/// the positive x axis with y growing downward.
pub fn needle_end(center: Vec2<f32>, radius: f32, degrees: f32) -> Vec2<f32> {
    let rad = degrees.to_radians();
    Vec2::new(center.x + radius * rad.cos(), center.y - radius * rad.sin())
}

fn stroke_line(canvas: &mut Canvas, from: Vec2<i32>, to: Vec2<i32>, color: Rgb, width: u32) {
    if width <= 1 {
        canvas.draw_line(from, to, color);
        return;
    }
    Line::new(point(from), point(to))
        .into_styled(PrimitiveStyle::with_stroke(to_rgb888(color), width))
        .draw(canvas)
        .unwrap_or_else(|never| match never {});
}

/// Quarter-circle elevation dial, 0 to 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationGauge {
    angle: f32,
}

impl Default for ElevationGauge {
    fn default() -> Self {
        Self { angle: 45.0 }
    }
}

impl ElevationGauge {
    const MARGIN: i32 = 2;

    pub fn new(angle: f32) -> Self {
        let mut gauge = Self::default();
        gauge.set_angle(angle);
        gauge
    }

    /// Out of range angles are clamped; NaN is ignored.
    pub fn set_angle(&mut self, angle: f32) {
        if angle.is_nan() {
            log::debug!("elevation gauge: ignoring NaN angle");
            return;
        }
        self.angle = angle.clamp(0.0, 90.0);
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Arc center and radius inside `area`. The arc hangs off the
    /// bottom-right corner so it fills the box.
    pub fn arc(&self, area: Rect<i32>) -> (Vec2<i32>, i32) {
        let radius = (area.size.x.min(area.size.y) - 2 * Self::MARGIN).max(0);
        let max = area.max();
        (
            Vec2::new(max.x - Self::MARGIN - radius, max.y - Self::MARGIN),
            radius,
        )
    }

    pub fn draw(&self, canvas: &mut Canvas, area: Rect<i32>, palette: Palette) {
        canvas.fill_rect(area, palette.background);
        canvas.stroke_rect(area, 2, palette.border);

        let (center, radius) = self.arc(area);
        if radius == 0 {
            return;
        }
        let c = center.as_f32();
        let r = radius as f32;

        let mut previous = needle_end(c, r, 0.0).round();
        for degrees in (2..=90).step_by(2) {
            let next = needle_end(c, r, degrees as f32).round();
            canvas.draw_line(previous, next, palette.border);
            previous = next;
        }

        stroke_line(canvas, center, Vec2::new(center.x + radius, center.y), palette.border, 2);
        stroke_line(canvas, center, Vec2::new(center.x, center.y - radius), palette.border, 2);

        let mark = (radius / 6) as f32;
        for degrees in (0..=90).step_by(15) {
            let outer = needle_end(c, r, degrees as f32);
            let inner = needle_end(c, r - mark, degrees as f32);
            canvas.draw_line(outer.round(), inner.round(), palette.border);
        }

        let tip = needle_end(c, r * 0.8, self.angle).round();
        stroke_line(canvas, center, tip, palette.alert, 2);
    }
}

/// Full-circle azimuth dial, 0 to 360 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AzimuthGauge {
    angle: f32,
}

impl Default for AzimuthGauge {
    fn default() -> Self {
        Self { angle: 39.0 }
    }
}

impl AzimuthGauge {
    pub fn new(angle: f32) -> Self {
        let mut gauge = Self::default();
        gauge.set_angle(angle);
        gauge
    }

    /// Wraps into `[0, 360)`; NaN is ignored.
    pub fn set_angle(&mut self, angle: f32) {
        if !angle.is_finite() {
            log::debug!("azimuth gauge: ignoring angle {}", angle);
            return;
        }
        let wrapped = angle.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negatives
        self.angle = if wrapped >= 360.0 { 0.0 } else { wrapped };
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Dial center and radius inside `area`.
    pub fn dial(&self, area: Rect<i32>) -> (Vec2<i32>, i32) {
        let half = area.size / 2;
        (
            area.origin + half,
            (half.x.min(half.y) - 5).max(0),
        )
    }

    pub fn draw(&self, canvas: &mut Canvas, area: Rect<i32>, palette: Palette) {
        canvas.fill_rect(area, palette.background);
        canvas.stroke_rect(area, 1, palette.border);

        let (center, radius) = self.dial(area);
        if radius == 0 {
            return;
        }
        Circle::with_center(point(center), (2 * radius + 1) as u32)
            .into_styled(
                PrimitiveStyleBuilder::new()
                    .stroke_color(to_rgb888(palette.border))
                    .stroke_width(1)
                    .fill_color(to_rgb888(palette.background))
                    .build(),
            )
            .draw(canvas)
            .unwrap_or_else(|never| match never {});

        let c = center.as_f32();
        let r = radius as f32;
        let mark = (radius / 6) as f32;
        for i in 0..24 {
            let degrees = (i * 15) as f32;
            let outer = needle_end(c, r, degrees).round();
            let inner = needle_end(c, r - mark, degrees).round();
            let width = if i % 3 == 0 { 2 } else { 1 };
            stroke_line(canvas, outer, inner, palette.border, width);
        }

        canvas.draw_line(
            Vec2::new(center.x - radius, center.y),
            Vec2::new(center.x + radius, center.y),
            palette.border,
        );
        canvas.draw_line(
            Vec2::new(center.x, center.y - radius),
            Vec2::new(center.x, center.y + radius),
            palette.border,
        );

        let tip = needle_end(c, r * 0.8, self.angle).round();
        canvas.draw_line(center, tip, palette.alert);
    }
}
