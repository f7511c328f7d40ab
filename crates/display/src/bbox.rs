use base::{Rect, Vec2};

/// Target box in source-frame pixels, as reported by the detector feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The box as a rectangle, widened so `max()` cannot overflow.
    pub fn rect(&self) -> Rect<i64> {
        Rect::new(
            Vec2::new(self.x as i64, self.y as i64),
            Vec2::new(self.w as i64, self.h as i64),
        )
    }

    /// Box center in frame pixels. Not rounded.
    pub fn center(&self) -> Vec2<f32> {
        Vec2::new(
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    /// Whether the box can be shown against a frame of `frame_size`.
    ///
    /// The box must have a non-negative origin and a positive size. When a
    /// frame size is known the box must also lie entirely inside it.
    pub fn is_valid(&self, frame_size: Option<Vec2<usize>>) -> bool {
        if self.x < 0 || self.y < 0 || self.w <= 0 || self.h <= 0 {
            return false;
        }
        match frame_size {
            None => true,
            Some(size) => Rect::new(Vec2::zero(), size.as_i64()).contains_rect(self.rect()),
        }
    }

    /// `Some(self)` if valid against `frame_size`, `None` otherwise.
    pub fn validate(self, frame_size: Option<Vec2<usize>>) -> Option<Self> {
        self.is_valid(frame_size).then_some(self)
    }
}
