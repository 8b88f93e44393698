use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut,
};
use imageproc::rect::Rect;

use crate::{
    color::Color,
    font::{FaceKind, FontHandle},
};

/// All templates target the same 3:4 portrait surface.
pub const WIDTH: u32 = 1242;
pub const HEIGHT: u32 = 1660;
pub const PADDING: u32 = 80;
pub const TEXT_AREA_WIDTH: u32 = WIDTH - PADDING * 2;

/// The target raster surface, mutated in place by the drawing primitives.
pub type Canvas = image::RgbImage;

pub fn new_canvas(background: Color) -> Canvas {
    image::ImageBuffer::from_pixel(WIDTH, HEIGHT, background)
}

/// Paint a top-to-bottom linear gradient, one full-width scanline at a time.
///
/// Channels interpolate independently and truncate to integer, so the ramp
/// is exactly reproducible for a given color pair and canvas height.
pub fn fill_vertical_gradient(canvas: &mut Canvas, top: Color, bottom: Color) {
    let (width, height) = canvas.dimensions();
    for y in 0..height {
        let ratio = f64::from(y) / f64::from(height);
        let color = lerp_rgb(top, bottom, ratio);
        for x in 0..width {
            canvas.put_pixel(x, y, color);
        }
    }
}

fn lerp_rgb(a: Color, b: Color, ratio: f64) -> Color {
    image::Rgb([
        lerp_channel(a.0[0], b.0[0], ratio),
        lerp_channel(a.0[1], b.0[1], ratio),
        lerp_channel(a.0[2], b.0[2], ratio),
    ])
}

fn lerp_channel(a: u8, b: u8, ratio: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * ratio) as u8
}

pub fn fill_rect(canvas: &mut Canvas, x: i32, y: i32, width: u32, height: u32, color: Color) {
    draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(width, height), color);
}

pub fn fill_circle(canvas: &mut Canvas, center: (i32, i32), radius: i32, color: Color) {
    draw_filled_circle_mut(canvas, center, radius, color);
}

/// Horizontal rule from `x0` to `x1`, `thickness` px tall, centered on `y`.
pub fn draw_hline(canvas: &mut Canvas, x0: i32, x1: i32, y: i32, thickness: u32, color: Color) {
    let width = (x1 - x0).max(1) as u32;
    fill_rect(canvas, x0, y - thickness as i32 / 2, width, thickness, color);
}

/// Draw one line of text with its top-left corner at `(x, y)`.
///
/// The glyphless fallback handle draws a hollow tofu box per non-whitespace
/// character so degraded renders stay legible as covers.
pub fn draw_text(canvas: &mut Canvas, color: Color, x: i32, y: i32, font: &FontHandle<'_>, text: &str) {
    match &font.face {
        FaceKind::Outline(face) => draw_text_mut(canvas, color, x, y, font.scale, face, text),
        FaceKind::Fallback => {
            let height = font.px().round().max(1.0) as u32;
            let mut cursor = x as f32;
            for ch in text.chars() {
                let advance = font.char_advance(ch);
                if !ch.is_whitespace() {
                    let width = (advance - 2.0).max(1.0) as u32;
                    draw_hollow_rect_mut(
                        canvas,
                        Rect::at(cursor as i32 + 1, y).of_size(width, height),
                        color,
                    );
                }
                cursor += advance;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn gradient_top_scanline_is_exact() {
        let mut img = new_canvas(Rgb([0, 0, 0]));
        fill_vertical_gradient(&mut img, Rgb([10, 200, 30]), Rgb([250, 0, 130]));
        assert_eq!(*img.get_pixel(0, 0), Rgb([10, 200, 30]));
        assert_eq!(*img.get_pixel(WIDTH - 1, 0), Rgb([10, 200, 30]));
    }

    #[test]
    fn gradient_bottom_scanline_is_within_one_unit() {
        let mut img = new_canvas(Rgb([0, 0, 0]));
        let bottom = Rgb([250, 0, 130]);
        fill_vertical_gradient(&mut img, Rgb([10, 200, 30]), bottom);
        let last = img.get_pixel(0, HEIGHT - 1);
        for c in 0..3 {
            let diff = i16::from(last.0[c]) - i16::from(bottom.0[c]);
            assert!(diff.abs() <= 1, "channel {c} off by {diff}");
        }
    }

    #[test]
    fn lerp_truncates_instead_of_rounding() {
        assert_eq!(lerp_channel(0, 255, 0.5), 127);
        assert_eq!(lerp_channel(0, 255, 0.0), 0);
        assert_eq!(lerp_channel(0, 255, 1.0), 255);
    }

    #[test]
    fn fill_rect_paints_interior() {
        let mut img = new_canvas(Rgb([0, 0, 0]));
        fill_rect(&mut img, 10, 10, 20, 20, Rgb([9, 9, 9]));
        assert_eq!(*img.get_pixel(15, 15), Rgb([9, 9, 9]));
        assert_eq!(*img.get_pixel(40, 40), Rgb([0, 0, 0]));
    }

    #[test]
    fn fallback_text_marks_non_whitespace_only() {
        let mut img = new_canvas(Rgb([0, 0, 0]));
        let font = crate::font::FontHandle::fallback(40.0);
        draw_text(&mut img, Rgb([255, 255, 255]), 100, 100, &font, "a b");
        // 'a' occupies [100,120); the space [120,140) stays untouched.
        assert_eq!(*img.get_pixel(101, 100), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(130, 100), Rgb([0, 0, 0]));
    }
}
