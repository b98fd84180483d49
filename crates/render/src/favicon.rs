use crate::FaviconError;
use base64::Engine;
use image::imageops::FilterType;
use image::RgbaImage;

pub const FAVICON_PREFIX: &str = "data:image/png;base64,";

/// Decodes a PNG data URI into a `size`×`size` icon with rounded corners.
pub fn decode_favicon(uri: &str, size: u32, radius: u32) -> Result<RgbaImage, FaviconError> {
    if size == 0 {
        return Err(FaviconError::EmptyBox);
    }
    let rest = uri
        .strip_prefix(FAVICON_PREFIX)
        .ok_or(FaviconError::UnsupportedFormat)?;

    // Older servers wrap the payload across lines
    let payload: String = rest
        .split(',')
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
    let icon = image::load_from_memory(&bytes)?
        .resize_exact(size, size, FilterType::Triangle)
        .to_rgba8();

    Ok(round_corners(icon, radius))
}

/// Clears alpha outside a rounded rectangle covering the whole image
fn round_corners(mut icon: RgbaImage, radius: u32) -> RgbaImage {
    let (width, height) = icon.dimensions();
    let r = f64::from(radius.min(width / 2).min(height / 2));
    if r <= 0.0 {
        return icon;
    }

    for (x, y, pixel) in icon.enumerate_pixels_mut() {
        let px = f64::from(x) + 0.5;
        let py = f64::from(y) + 0.5;
        let cx = px.clamp(r, f64::from(width) - r);
        let cy = py.clamp(r, f64::from(height) - r);
        let (dx, dy) = (px - cx, py - cy);
        if dx * dx + dy * dy > r * r {
            pixel[3] = 0;
        }
    }
    icon
}
