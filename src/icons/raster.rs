//! Raster icon drawing
//!
//! Shapes use inclusive bounding boxes `[x0, y0, x1, y1]`, clipped to the
//! canvas, so a rectangle from 0 to 3 covers four pixels.

use crate::icons::{Glyph, IconResult, IconSpec, Rgb};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;

const WHITE: Rgb = Rgb(255, 255, 255);

/// Circle outline width in pixels
const CIRCLE_OUTLINE: u32 = 2;

/// Draws the icon on a transparent canvas
pub fn render_raster(spec: &IconSpec) -> RgbaImage {
    let size = spec.size;
    let (start, end) = spec.background;
    let mut img = RgbaImage::new(size, size);

    let margin = size / 8;
    let circle = BoundingBox::new(margin, margin, size - margin, size - margin);
    draw_gradient_circle(&mut img, circle, start, end, CIRCLE_OUTLINE);

    match spec.glyph {
        Glyph::Building => draw_building(&mut img, size, start, end),
        Glyph::Block => {
            let m = size / 3;
            fill_rect(&mut img, BoundingBox::new(m, m, size - m, size - m), WHITE);
        }
    }

    img
}

/// Renders the icon as PNG bytes
pub fn render_png(spec: &IconSpec) -> IconResult<Vec<u8>> {
    let img = render_raster(spec);
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

pub(crate) fn save_png(spec: &IconSpec, path: &Path) -> IconResult<()> {
    render_raster(spec).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// White building with an outline and a 2x2 grid of windows
fn draw_building(img: &mut RgbaImage, size: u32, window: Rgb, outline: Rgb) {
    let m = size / 4;
    let width = size - 2 * m;

    let body = BoundingBox::new(m, m + width / 4, size - m, size - m);
    fill_rect(img, body, WHITE);
    stroke_rect(img, body, outline);

    let side = width / 6;
    for row in 0..2 {
        for col in 0..2 {
            let x = m + side + col * (side * 2);
            let y = m + width / 3 + row * (side * 2);
            fill_rect(img, BoundingBox::new(x, y, x + side, y + side), window);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct BoundingBox {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl BoundingBox {
    fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Pixel coordinates covered by the box and inside the canvas
    fn pixels(&self, img: &RgbaImage) -> impl Iterator<Item = (u32, u32)> {
        let x_end = self.x1.min(img.width().saturating_sub(1));
        let y_end = self.y1.min(img.height().saturating_sub(1));
        let (x0, y0) = (self.x0, self.y0);
        (y0..=y_end).flat_map(move |y| (x0..=x_end).map(move |x| (x, y)))
    }
}

fn rgba(color: Rgb) -> Rgba<u8> {
    Rgba([color.0, color.1, color.2, 255])
}

fn fill_rect(img: &mut RgbaImage, bbox: BoundingBox, color: Rgb) {
    if img.width() == 0 {
        return;
    }
    for (x, y) in bbox.pixels(img) {
        img.put_pixel(x, y, rgba(color));
    }
}

/// One-pixel outline along the edges of the box
fn stroke_rect(img: &mut RgbaImage, bbox: BoundingBox, color: Rgb) {
    if img.width() == 0 {
        return;
    }
    for (x, y) in bbox.pixels(img) {
        if x == bbox.x0 || x == bbox.x1 || y == bbox.y0 || y == bbox.y1 {
            img.put_pixel(x, y, rgba(color));
        }
    }
}

/// Circle inscribed in `bbox`, filled with a diagonal gradient from `start`
/// (top-left) to `end` (bottom-right) and ringed with `outline_width` pixels of `end`
fn draw_gradient_circle(img: &mut RgbaImage, bbox: BoundingBox, start: Rgb, end: Rgb, outline_width: u32) {
    if img.width() == 0 {
        return;
    }

    let cx = (bbox.x0 + bbox.x1 + 1) as f32 / 2.0;
    let cy = (bbox.y0 + bbox.y1 + 1) as f32 / 2.0;
    let radius = (bbox.x1 - bbox.x0 + 1) as f32 / 2.0;
    let span = (2 * (bbox.x1 - bbox.x0)).max(1) as f32;

    for (x, y) in bbox.pixels(img) {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > radius {
            continue;
        }

        let color = if distance > radius - outline_width as f32 {
            end
        } else {
            let t = ((x - bbox.x0) + (y - bbox.y0)) as f32 / span;
            lerp(start, end, t)
        };
        img.put_pixel(x, y, rgba(color));
    }
}

fn lerp(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}
