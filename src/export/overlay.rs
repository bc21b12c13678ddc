//! Debug overlays for sprite sheets.
//!
//! Marks every sprite of a sheet with its outline and slice number so the
//! slices can be identified by eye. Sprites of at least 100×100 pixels also
//! get inward-pointing ruler ticks every 10 pixels near each corner, which
//! makes inset values easy to read off the image.
//!
//! Drawing is not idempotent: rendering onto an already marked image stacks
//! another set of marks on top.

use anyhow::{Context, Result};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{DynamicImage, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{Rect, RgbColor, SpriteSection, SpriteSheet};

/// Length of a ruler tick in pixels.
pub const TICK_LENGTH: i64 = 10;

/// Distance between ruler ticks in pixels.
pub const TICK_SPACING: i64 = 10;

/// Ticks are drawn at offsets below this distance from each corner.
pub const TICK_LIMIT: i64 = 80;

/// Minimum sprite width and height that receives a ruler.
pub const RULER_MIN_SIZE: i32 = 100;

/// Side length of an unscaled glyph of the embedded font.
const GLYPH_SIZE: i64 = 8;

/// Colors and sizes used when drawing overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    /// Outline and label color
    pub label_color: RgbColor,
    /// Ruler ticks on the top and bottom edges
    pub top_bottom_color: RgbColor,
    /// Ruler ticks on the left edge
    pub left_color: RgbColor,
    /// Ruler ticks on the right edge
    pub right_color: RgbColor,
    /// Outline thickness in pixels (1 or 2)
    pub outline_width: u32,
    /// Label glyph scale (glyphs are 8 px at scale 1)
    pub label_scale: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            label_color: RgbColor::RED,
            top_bottom_color: RgbColor::new(0xf0, 0x00, 0x56),
            left_color: RgbColor::new(0x4b, 0x5c, 0xc4),
            right_color: RgbColor::new(0x16, 0xa9, 0x51),
            outline_width: 1,
            label_scale: 3,
        }
    }
}

impl OverlayStyle {
    /// Checks that sizes are in range.
    ///
    /// # Errors
    ///
    /// Returns an error if the outline width or the label scale is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(1..=2).contains(&self.outline_width) {
            anyhow::bail!(
                "Invalid outline width {}. Must be 1 or 2 pixels",
                self.outline_width
            );
        }
        if self.label_scale == 0 {
            anyhow::bail!("Invalid label scale 0. Must be at least 1");
        }
        Ok(())
    }
}

/// Draws the overlay for every sprite of `sheet` onto `image`.
pub fn draw_overlay(image: &mut RgbaImage, sheet: &SpriteSheet, style: &OverlayStyle) {
    for section in &sheet.sections {
        draw_section(image, section, style);
    }
}

/// Draws outline, label and (for large sprites) ruler of one sprite.
pub fn draw_section(image: &mut RgbaImage, section: &SpriteSection, style: &OverlayStyle) {
    let rect = section.rect;
    let label_color = style.label_color.to_rgba();

    draw_outline(image, &rect, label_color, style.outline_width);

    let center_x = i64::from(rect.x) + i64::from(rect.width) / 2;
    let center_y = (f64::from(rect.y) + f64::from(rect.height) * 0.8).round() as i64;
    draw_label(
        image,
        center_x,
        center_y,
        &section.label(),
        label_color,
        style.label_scale,
    );

    if rect.width >= RULER_MIN_SIZE && rect.height >= RULER_MIN_SIZE {
        draw_ruler(image, &rect, style);
    }
}

/// Opens `image_path`, draws the overlay and writes the result to `output_path`.
///
/// The source image is never modified. Images without an alpha channel are
/// written back without one.
///
/// # Errors
///
/// Returns an error if both paths are the same, or if the image cannot be
/// decoded or saved.
pub fn render_overlay(
    image_path: &Path,
    sheet: &SpriteSheet,
    style: &OverlayStyle,
    output_path: &Path,
) -> Result<()> {
    if image_path == output_path {
        anyhow::bail!(
            "Refusing to draw overlay in place: {}",
            image_path.display()
        );
    }

    let source = image::open(image_path)
        .context(format!("Failed to open image: {}", image_path.display()))?;
    let has_alpha = source.color().has_alpha();

    let mut canvas = source.to_rgba8();
    draw_overlay(&mut canvas, sheet, style);

    let output = if has_alpha {
        DynamicImage::ImageRgba8(canvas)
    } else {
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).to_rgb8())
    };

    output
        .save(output_path)
        .context(format!("Failed to save image: {}", output_path.display()))
}

fn put_pixel(image: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
        return;
    };
    if px < image.width() && py < image.height() {
        image.put_pixel(px, py, color);
    }
}

/// Straight line between two points, both ends inclusive.
fn draw_line(image: &mut RgbaImage, from: (i64, i64), to: (i64, i64), color: Rgba<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let step_x = if x < to.0 { 1 } else { -1 };
    let step_y = if y < to.1 { 1 } else { -1 };
    let mut error = dx + dy;

    loop {
        put_pixel(image, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

/// Box from `(x, y)` to `(x + width, y + height)` inclusive, growing inward.
fn draw_outline(image: &mut RgbaImage, rect: &Rect, color: Rgba<u8>, width: u32) {
    let (left, top) = (i64::from(rect.x), i64::from(rect.y));
    let (right, bottom) = (rect.right(), rect.bottom());

    for inset in 0..i64::from(width.max(1)) {
        let (x0, y0, x1, y1) = (left + inset, top + inset, right - inset, bottom - inset);
        if x0 > x1 || y0 > y1 {
            break;
        }
        // Edges are axis-aligned, so clamping spans to just outside the
        // image leaves the visible pixels unchanged.
        let (sx0, sx1) = (clamp_span(x0, image.width()), clamp_span(x1, image.width()));
        let (sy0, sy1) = (clamp_span(y0, image.height()), clamp_span(y1, image.height()));
        draw_line(image, (sx0, y0), (sx1, y0), color);
        draw_line(image, (sx0, y1), (sx1, y1), color);
        draw_line(image, (x0, sy0), (x0, sy1), color);
        draw_line(image, (x1, sy0), (x1, sy1), color);
    }
}

fn clamp_span(value: i64, size: u32) -> i64 {
    value.clamp(-1, i64::from(size))
}

/// Text centered on `(center_x, center_y)` using the embedded 8×8 font.
fn draw_label(
    image: &mut RgbaImage,
    center_x: i64,
    center_y: i64,
    text: &str,
    color: Rgba<u8>,
    scale: u32,
) {
    let scale = i64::from(scale.max(1));
    let glyph_size = GLYPH_SIZE * scale;
    let char_count = i64::try_from(text.chars().count()).unwrap_or(0);

    let origin_x = center_x - char_count * glyph_size / 2;
    let origin_y = center_y - glyph_size / 2;

    for (index, ch) in (0_i64..).zip(text.chars()) {
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')) else {
            continue;
        };
        let glyph_x = origin_x + index * glyph_size;

        for (row, bits) in (0_i64..).zip(glyph) {
            for col in 0..GLYPH_SIZE {
                if (bits >> col) & 1 == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        put_pixel(
                            image,
                            glyph_x + col * scale + sx,
                            origin_y + row * scale + sy,
                            color,
                        );
                    }
                }
            }
        }
    }
}

/// Inward ticks near all four corners of `rect`.
fn draw_ruler(image: &mut RgbaImage, rect: &Rect, style: &OverlayStyle) {
    let (x, y) = (i64::from(rect.x), i64::from(rect.y));
    let (width, height) = (i64::from(rect.width), i64::from(rect.height));
    let top_bottom = style.top_bottom_color.to_rgba();
    let left = style.left_color.to_rgba();
    let right = style.right_color.to_rgba();

    for offset in (TICK_SPACING..TICK_LIMIT).step_by(TICK_SPACING as usize) {
        for tick_x in [x + offset, x + width - offset] {
            // top edge, pointing down
            draw_line(image, (tick_x, y), (tick_x, y + TICK_LENGTH), top_bottom);
            // bottom edge, pointing up
            draw_line(
                image,
                (tick_x, y + height),
                (tick_x, y + height - TICK_LENGTH),
                top_bottom,
            );
        }

        for tick_y in [y + offset, y + height - offset] {
            draw_line(image, (x, tick_y), (x + TICK_LENGTH, tick_y), left);
            draw_line(
                image,
                (x + width, tick_y),
                (x + width - TICK_LENGTH, tick_y),
                right,
            );
        }
    }
}
