use {
    crate::*,
    base::{Rect, Vec2},
    embedded_graphics::{
        mono_font::MonoTextStyle,
        pixelcolor::Rgb888,
        prelude::*,
        text::{Alignment, Baseline, Text, TextStyleBuilder},
    },
    std::convert::Infallible,
};

/// An owned RGB8 drawing surface.
///
/// Everything is clipped to the canvas; drawing off the edge is not an
/// error. The canvas is also an embedded-graphics `DrawTarget`, so any
/// styled primitive can be drawn straight onto it.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: Vec2<usize>,
    data: Vec<u8>,
}

pub(crate) fn to_rgb888(color: Rgb) -> Rgb888 {
    Rgb888::new(color[0], color[1], color[2])
}

pub(crate) fn point(p: Vec2<i32>) -> Point {
    Point::new(p.x, p.y)
}

impl Canvas {
    /// A black canvas of `size` pixels.
    pub fn new(size: Vec2<usize>) -> Self {
        Self {
            size,
            data: vec![0u8; size.area() * 3],
        }
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn bounds(&self) -> Rect<i32> {
        Rect::new(Vec2::zero(), self.size.as_i32())
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        let idx = self.index(x, y)?;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.size.x || y as usize >= self.size.y {
            return None;
        }
        Some((y as usize * self.size.x + x as usize) * 3)
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx..idx + 3].copy_from_slice(&color);
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        for pixel in self.data.chunks_exact_mut(3) {
            pixel.copy_from_slice(&color);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect<i32>, color: Rgb) {
        let Some(clipped) = rect.intersection(self.bounds()) else {
            return;
        };
        let min = clipped.min();
        let max = clipped.max();
        for y in min.y..max.y {
            let start = (y as usize * self.size.x + min.x as usize) * 3;
            let end = (y as usize * self.size.x + max.x as usize) * 3;
            for pixel in self.data[start..end].chunks_exact_mut(3) {
                pixel.copy_from_slice(&color);
            }
        }
    }

    /// Outline `rect` with a border `width` pixels thick, drawn inward.
    pub fn stroke_rect(&mut self, rect: Rect<i32>, width: i32, color: Rgb) {
        if width <= 0 {
            return;
        }
        let min = rect.min();
        let max = rect.max();
        let w = width.min(rect.size.x).min(rect.size.y);
        self.fill_rect(Rect::new(min, Vec2::new(rect.size.x, w)), color);
        self.fill_rect(Rect::new(Vec2::new(min.x, max.y - w), Vec2::new(rect.size.x, w)), color);
        self.fill_rect(Rect::new(min, Vec2::new(w, rect.size.y)), color);
        self.fill_rect(Rect::new(Vec2::new(max.x - w, min.y), Vec2::new(w, rect.size.y)), color);
    }

    /// One pixel wide line, endpoints inclusive.
    pub fn draw_line(&mut self, from: Vec2<i32>, to: Vec2<i32>, color: Rgb) {
        let (mut x0, mut y0, mut x1, mut y1) = (from.x, from.y, to.x, to.y);
        let width = self.size.x as i32;
        let height = self.size.y as i32;

        // Cohen-Sutherland clipping
        loop {
            let outcode0 = compute_outcode(x0, y0, width, height);
            let outcode1 = compute_outcode(x1, y1, width, height);
            if (outcode0 | outcode1) == 0 {
                break;
            } else if (outcode0 & outcode1) != 0 {
                return;
            }
            let outcode = if outcode0 != 0 { outcode0 } else { outcode1 };
            let (x, y) = clip_point(x0, y0, x1, y1, outcode, width, height);
            if outcode == outcode0 {
                x0 = x;
                y0 = y;
            } else {
                x1 = x;
                y1 = y;
            }
        }

        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        loop {
            self.set_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Copy an RGB8 image of `size` with its top-left corner at `origin`.
    pub fn blit(&mut self, origin: Vec2<i32>, size: Vec2<usize>, data: &[u8]) {
        if data.len() < size.area() * 3 {
            log::warn!(
                "canvas: blit source is {} bytes, need {}",
                data.len(),
                size.area() * 3
            );
            return;
        }
        let target = Rect::new(origin, size.as_i32());
        let Some(clipped) = target.intersection(self.bounds()) else {
            return;
        };
        let min = clipped.min();
        let row_bytes = clipped.size.x as usize * 3;
        for y in 0..clipped.size.y {
            let src_x = (min.x - origin.x) as usize;
            let src_y = (min.y - origin.y + y) as usize;
            let src = (src_y * size.x + src_x) * 3;
            let dst = ((min.y + y) as usize * self.size.x + min.x as usize) * 3;
            self.data[dst..dst + row_bytes].copy_from_slice(&data[src..src + row_bytes]);
        }
    }

    /// Copy another canvas onto this one.
    pub fn draw_canvas(&mut self, origin: Vec2<i32>, other: &Canvas) {
        self.blit(origin, other.size, &other.data);
    }

    /// Draw `text` centered on `center`.
    pub fn draw_text_centered(
        &mut self,
        text: &str,
        center: Vec2<i32>,
        font: FontSize,
        color: Rgb,
    ) {
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(
            text,
            point(center),
            MonoTextStyle::new(font.font(), to_rgb888(color)),
            text_style,
        )
        .draw(self)
        .unwrap_or_else(|never| match never {});
    }

    /// Draw `text` with its baseline starting at `origin`.
    pub fn draw_text(&mut self, text: &str, origin: Vec2<i32>, font: FontSize, color: Rgb) {
        Text::with_baseline(
            text,
            point(origin),
            MonoTextStyle::new(font.font(), to_rgb888(color)),
            Baseline::Alphabetic,
        )
        .draw(self)
        .unwrap_or_else(|never| match never {});
    }

    /// Pack into `0x00RRGGBB` words for a window buffer.
    pub fn to_u32(&self) -> Vec<u32> {
        raster::rgb_to_u32(self.size, &self.data)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.size.x as u32, self.size.y as u32)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(position, color) in pixels {
            self.set_pixel(position.x, position.y, [color.r(), color.g(), color.b()]);
        }
        Ok(())
    }
}

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn compute_outcode(x: i32, y: i32, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

fn clip_point(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    outcode: u8,
    width: i32,
    height: i32,
) -> (i32, i32) {
    let dx = x1 - x0;
    let dy = y1 - y0;
    if outcode & TOP != 0 {
        (x0 + dx * (0 - y0) / dy, 0)
    } else if outcode & BOTTOM != 0 {
        (x0 + dx * (height - 1 - y0) / dy, height - 1)
    } else if outcode & LEFT != 0 {
        (0, y0 + dy * (0 - x0) / dx)
    } else {
        (width - 1, y0 + dy * (width - 1 - x0) / dx)
    }
}
