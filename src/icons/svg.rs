//! SVG rendering of the icon composition
//!
//! Used when raster drawing is unavailable. The markup describes the same
//! circle, gradient and building as the raster icons.

use crate::icons::{PRIMARY, SECONDARY};

/// Building glyph shown as text in the markup
const GLYPH_TEXT: &str = "\u{1F3E2}";

/// Geometry of the SVG icon at one size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgLayout {
    pub size: u32,
    pub center: u32,
    pub radius: u32,
    pub building_x: u32,
    pub building_y: u32,
    pub building_w: u32,
    pub building_h: u32,
    pub font_size: u32,
    pub text_y: u32,
}

impl SvgLayout {
    pub fn for_size(size: u32) -> Self {
        let center = size / 2;
        let building_w = size / 3;
        let building_h = size / 3;
        let font_size = size / 4;

        Self {
            size,
            center,
            radius: center.saturating_sub(2),
            building_x: center - building_w / 2,
            building_y: center - building_h / 2,
            building_w,
            building_h,
            font_size,
            text_y: center + font_size / 2,
        }
    }
}

/// Renders the icon at `size` pixels as an SVG document
pub fn render_svg(size: u32) -> String {
    let l = SvgLayout::for_size(size);
    let (start, end) = (PRIMARY.hex(), SECONDARY.hex());

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">
  <circle cx="{center}" cy="{center}" r="{radius}" fill="url(#grad)" stroke="{end}" stroke-width="2"/>
  <defs>
    <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" style="stop-color:{start};stop-opacity:1" />
      <stop offset="100%" style="stop-color:{end};stop-opacity:1" />
    </linearGradient>
  </defs>
  <rect x="{bx}" y="{by}" width="{bw}" height="{bh}" fill="white" stroke="{end}"/>
  <text x="{center}" y="{text_y}" text-anchor="middle" fill="white" font-family="Arial" font-size="{font_size}" font-weight="bold">{glyph}</text>
</svg>"#,
        size = l.size,
        center = l.center,
        radius = l.radius,
        bx = l.building_x,
        by = l.building_y,
        bw = l.building_w,
        bh = l.building_h,
        text_y = l.text_y,
        font_size = l.font_size,
        start = start,
        end = end,
        glyph = GLYPH_TEXT,
    )
}
