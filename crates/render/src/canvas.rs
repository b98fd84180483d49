use crate::fonts::{Glyph, Typeface};
use image::RgbaImage;
use motdcard_models::Rgb;

fn blend_pixel(canvas: &mut RgbaImage, x: u32, y: u32, color: Rgb, alpha: u8) {
    if alpha == 0 {
        return;
    }
    let alpha = u16::from(alpha);
    let inv_alpha = 255 - alpha;
    let pixel = canvas.get_pixel_mut(x, y);
    for (channel, src) in [color.0, color.1, color.2].into_iter().enumerate() {
        let dst = u16::from(pixel[channel]);
        pixel[channel] = ((u16::from(src) * alpha + dst * inv_alpha + 127) / 255) as u8;
    }
    pixel[3] = 255;
}

fn blend_glyph(canvas: &mut RgbaImage, x: i32, y: i32, glyph: &Glyph, color: Rgb) {
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    for row in 0..glyph.height {
        let py = y + row as i32;
        if py < 0 || py >= height {
            continue;
        }
        for col in 0..glyph.width {
            let px = x + col as i32;
            if px < 0 || px >= width {
                continue;
            }
            let alpha = glyph.coverage[row * glyph.width + col];
            blend_pixel(canvas, px as u32, py as u32, color, alpha);
        }
    }
}

/// Draws `text` with its top-left corner at (`x`, `y`) and returns the pen x
/// after the last character.
pub fn draw_text(
    canvas: &mut RgbaImage,
    face: &dyn Typeface,
    px: f32,
    x: f32,
    y: f32,
    text: &str,
    color: Rgb,
) -> f32 {
    let mut pen = x;
    for ch in text.chars() {
        let glyph = face.rasterize(ch, px);
        if glyph.width > 0 && glyph.height > 0 {
            blend_glyph(
                canvas,
                pen.round() as i32 + glyph.left,
                y.round() as i32 + glyph.top,
                &glyph,
                color,
            );
        }
        pen += face.advance(ch, px);
    }
    pen
}

/// Composites `overlay` onto `canvas` at (`x`, `y`) using the overlay's alpha
pub fn overlay_rgba(canvas: &mut RgbaImage, overlay: &RgbaImage, x: u32, y: u32) {
    for (ox, oy, pixel) in overlay.enumerate_pixels() {
        let (cx, cy) = (x + ox, y + oy);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }
        blend_pixel(canvas, cx, cy, Rgb(pixel[0], pixel[1], pixel[2]), pixel[3]);
    }
}
