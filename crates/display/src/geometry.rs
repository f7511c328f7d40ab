use {
    crate::*,
    base::Vec2,
};

/// Where the crosshair goes and how big it is, in panel pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crosshair {
    pub anchor: Vec2<f32>,
    pub half_length: i32,
}

impl Crosshair {
    /// Anchor rounded to the nearest pixel.
    pub fn pixel(&self) -> Vec2<i32> {
        self.anchor.round()
    }
}

/// Place the crosshair on a panel of `panel` pixels.
///
/// A bounding box moves the anchor to the box center, mapped from frame to
/// panel pixels per axis, and sizes the arms from the box. Without a known
/// frame size, or when the box does not fit inside the frame, the box is
/// ignored.
pub fn crosshair(
    panel: Vec2<usize>,
    frame_size: Option<Vec2<usize>>,
    bounding_box: Option<BoundingBox>,
    config: &CrosshairConfig,
) -> Crosshair {
    let centered = Crosshair {
        anchor: Vec2::new((panel.x / 2) as f32, (panel.y / 2) as f32),
        half_length: config.default_half_length,
    };
    let (Some(bounding_box), Some(frame)) = (bounding_box, frame_size) else {
        return centered;
    };
    if frame.area() == 0 || !bounding_box.is_valid(Some(frame)) {
        return centered;
    }

    let scale = panel.as_f32() / frame.as_f32();
    let quarter = (bounding_box.w as i64 + bounding_box.h as i64) / 4;
    Crosshair {
        anchor: bounding_box.center() * scale,
        half_length: quarter.clamp(
            config.min_half_length as i64,
            config.max_half_length as i64,
        ) as i32,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Major,
    Minor,
}

/// One ruler tick. `x` is the panel column, truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilTick {
    pub offset: i32,
    pub x: i32,
    pub kind: TickKind,
    pub labeled: bool,
}

impl MilTick {
    pub fn length(&self, scale: &MilScaleConfig) -> i32 {
        match self.kind {
            TickKind::Major => scale.major_tick_length,
            TickKind::Minor => scale.minor_tick_length,
        }
    }
}

/// Ruler ticks whose zero sits at `anchor_x`, clipped to `[0, panel_width]`.
pub fn mil_ticks(anchor_x: f32, panel_width: usize, scale: &MilScaleConfig) -> Vec<MilTick> {
    if scale.fov_mil <= 0.0 {
        return Vec::new();
    }
    let width = panel_width as f32;
    let pixels_per_mil = width / scale.fov_mil;
    let major = scale.major_spacing.max(1);
    let label = scale.label_spacing.max(1);

    (-scale.range..=scale.range)
        .step_by(scale.minor_spacing.max(1) as usize)
        .filter_map(|offset| {
            let x = anchor_x + offset as f32 * pixels_per_mil;
            if x < 0.0 || x > width {
                return None;
            }
            let is_major = offset % major == 0;
            Some(MilTick {
                offset,
                x: x as i32,
                kind: if is_major { TickKind::Major } else { TickKind::Minor },
                labeled: is_major && offset % label == 0,
            })
        })
        .collect()
}
