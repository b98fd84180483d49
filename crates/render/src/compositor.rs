use crate::canvas::{draw_text, overlay_rgba};
use crate::favicon::decode_favicon;
use crate::fonts::FontSet;
use crate::layout::{CardGeometry, InfoColumn};
use crate::RenderError;
use image::{ImageEncoder, Rgba, RgbaImage};
use motdcard_config::CardLabels;
use motdcard_models::{Rgb, ServerStatusRecord};

const BACKGROUND: Rgb = Rgb(12, 10, 30);
const CAPTION_COLOR: Rgb = Rgb(180, 180, 180);
const LABEL_COLOR: Rgb = Rgb(200, 200, 200);
const VALUE_COLOR: Rgb = Rgb::WHITE;

/// Renders `record` into PNG bytes
pub fn render(
    record: &ServerStatusRecord,
    geometry: &CardGeometry,
    fonts: &FontSet,
    labels: &CardLabels,
) -> Result<Vec<u8>, RenderError> {
    let canvas = compose(record, geometry, fonts, labels);
    encode_png(&canvas)
}

pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut png_bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png_bytes).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
    )?;
    Ok(png_bytes)
}

/// Draws the full card onto a fresh canvas
pub fn compose(
    record: &ServerStatusRecord,
    geometry: &CardGeometry,
    fonts: &FontSet,
    labels: &CardLabels,
) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(
        geometry.width,
        geometry.height,
        Rgba(BACKGROUND.to_rgba()),
    );

    if let Some(uri) = record.favicon_data_uri() {
        match decode_favicon(uri, geometry.favicon_size, geometry.favicon_radius) {
            Ok(icon) => overlay_rgba(&mut canvas, &icon, geometry.favicon.x, geometry.favicon.y),
            Err(e) => tracing::debug!("Skipping favicon of {}: {}", record.hostname, e),
        }
    }

    let sizes = geometry.fonts;
    let at = |p: crate::Point| (p.x as f32, p.y as f32);

    let (x, y) = at(geometry.caption);
    draw_text(&mut canvas, fonts.subtitle.as_ref(), sizes.subtitle, x, y, &labels.caption, CAPTION_COLOR);
    let (x, y) = at(geometry.title);
    draw_text(&mut canvas, fonts.title.as_ref(), sizes.title, x, y, &record.hostname, VALUE_COLOR);
    let (x, y) = at(geometry.section);
    draw_text(&mut canvas, fonts.label.as_ref(), sizes.label, x, y, &labels.section, VALUE_COLOR);

    let status = if record.is_online() {
        labels.online.clone()
    } else {
        labels.offline.clone()
    };
    let version = record.version_name().unwrap_or_default().to_string();
    let players = match (record.players_online(), record.players_max()) {
        (Some(online), Some(max)) => format!("{} / {}", online, max),
        _ => String::new(),
    };
    let latency = record
        .latency_ms()
        .map(|ms| ms.to_string())
        .unwrap_or_default();

    draw_info_column(
        &mut canvas,
        &geometry.left,
        geometry,
        fonts,
        &[(&labels.status, &status), (&labels.version, &version)],
    );
    draw_info_column(
        &mut canvas,
        &geometry.right,
        geometry,
        fonts,
        &[(&labels.players, &players), (&labels.latency, &latency)],
    );

    if geometry.show_motd {
        draw_motd(&mut canvas, record.motd_raw().unwrap_or_default(), geometry, fonts, labels);
    }

    canvas
}

fn draw_info_column(
    canvas: &mut RgbaImage,
    column: &InfoColumn,
    geometry: &CardGeometry,
    fonts: &FontSet,
    rows: &[(&String, &String)],
) {
    for (index, (label, value)) in rows.iter().enumerate() {
        let (label_at, value_at) = column.row(index as u32);
        draw_text(
            canvas,
            fonts.label.as_ref(),
            geometry.fonts.label,
            label_at.x as f32,
            label_at.y as f32,
            label,
            LABEL_COLOR,
        );
        draw_text(
            canvas,
            fonts.value.as_ref(),
            geometry.fonts.value,
            value_at.x as f32,
            value_at.y as f32,
            value,
            VALUE_COLOR,
        );
    }
}

fn draw_motd(
    canvas: &mut RgbaImage,
    motd_raw: &str,
    geometry: &CardGeometry,
    fonts: &FontSet,
    labels: &CardLabels,
) {
    draw_text(
        canvas,
        fonts.label.as_ref(),
        geometry.fonts.label,
        geometry.motd_header.x as f32,
        geometry.motd_header.y as f32,
        &labels.motd,
        LABEL_COLOR,
    );

    let face = fonts.motd.as_ref();
    let px = geometry.fonts.motd;
    let line_height = face.ink_height(motdcard_motd::CODE_SENTINEL, px) + geometry.motd_line_spacing as f32;
    let left = geometry.motd_text.x as f32;

    let mut y = geometry.motd_text.y as f32;
    for line in motdcard_motd::parse(motd_raw, VALUE_COLOR) {
        let mut x = left;
        for segment in &line.segments {
            x = draw_text(canvas, face, px, x, y, &segment.text, segment.color);
        }
        y += line_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CardVariant;
    use motdcard_models::OnlineStatus;

    const GREEN: Rgba<u8> = Rgba([85, 255, 85, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn online_record(favicon: Option<String>) -> ServerStatusRecord {
        ServerStatusRecord::online(
            "play.example.com",
            None,
            OnlineStatus {
                latency_ms: 42,
                version_name: "1.20.1".to_string(),
                protocol_version: 763,
                players_online: 5,
                players_max: 20,
                motd_raw: "§aWelcome!§r".to_string(),
                motd_plain: "Welcome!".to_string(),
                favicon,
            },
        )
    }

    fn decode(png: &[u8]) -> RgbaImage {
        image::load_from_memory(png).unwrap().to_rgba8()
    }

    fn count_color(canvas: &RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) -> usize {
        (y0..y1)
            .flat_map(|y| (x0..x1).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.get_pixel(x, y) == &color)
            .count()
    }

    #[test]
    fn test_render_enhanced_card() {
        let geometry = CardGeometry::layout(1.0, CardVariant::Enhanced);
        let png = render(
            &online_record(None),
            &geometry,
            &FontSet::builtin(),
            &CardLabels::default(),
        )
        .unwrap();

        let canvas = decode(&png);
        assert_eq!(canvas.dimensions(), (610, 430));
        assert_eq!(canvas.get_pixel(5, 5), &Rgba(BACKGROUND.to_rgba()));

        // "Welcome!" in green, 'W' left stem starts at the MOTD anchor
        assert_eq!(canvas.get_pixel(61, 336), &GREEN);
        assert!(count_color(&canvas, 60, 332, 400, 360, GREEN) > 100);

        // "5 / 20": top bar of the '5' at the right value anchor
        assert_eq!(canvas.get_pixel(380, 207), &WHITE);
        assert!(count_color(&canvas, 380, 204, 500, 230, WHITE) > 50);
    }

    #[test]
    fn test_player_count_drawn_at_value_anchor() {
        let geometry = CardGeometry::layout(1.0, CardVariant::Enhanced);
        let fonts = FontSet::builtin();
        let card = compose(&online_record(None), &geometry, &fonts, &CardLabels::default());

        let (_, value_at) = geometry.right.row(0);
        let mut expected = RgbaImage::from_pixel(geometry.width, geometry.height, Rgba(BACKGROUND.to_rgba()));
        let end = draw_text(
            &mut expected,
            fonts.value.as_ref(),
            geometry.fonts.value,
            value_at.x as f32,
            value_at.y as f32,
            "5 / 20",
            VALUE_COLOR,
        );

        let (x0, x1) = (value_at.x, end.ceil() as u32);
        let (y0, y1) = (value_at.y, value_at.y + geometry.fonts.value.ceil() as u32);
        assert!(count_color(&expected, x0, y0, x1, y1, WHITE) > 50);
        for y in y0..y1 {
            for x in x0..x1 {
                assert_eq!(card.get_pixel(x, y), expected.get_pixel(x, y), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_favicon_composited() {
        let icon = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 255, 255]));
        let uri = format!(
            "{}{}",
            crate::FAVICON_PREFIX,
            base64::Engine::encode(
                &base64::engine::general_purpose::STANDARD,
                encode_png(&icon).unwrap()
            )
        );
        let geometry = CardGeometry::layout(1.0, CardVariant::Enhanced);
        let canvas = compose(
            &online_record(Some(uri)),
            &geometry,
            &FontSet::builtin(),
            &CardLabels::default(),
        );

        let center = canvas.get_pixel(92, 80);
        assert!(center[2] > 200 && center[0] < 40);
        // masked corner keeps the background
        assert_eq!(canvas.get_pixel(60, 48), &Rgba(BACKGROUND.to_rgba()));
    }

    #[test]
    fn test_invalid_favicon_is_skipped() {
        let geometry = CardGeometry::layout(1.0, CardVariant::Enhanced);
        let record = online_record(Some("data:image/png;base64,%%%".to_string()));

        let png = render(&record, &geometry, &FontSet::builtin(), &CardLabels::default()).unwrap();
        let canvas = decode(&png);

        assert_eq!(canvas.dimensions(), (610, 430));
        assert_eq!(canvas.get_pixel(92, 80), &Rgba(BACKGROUND.to_rgba()));
    }

    #[test]
    fn test_offline_record() {
        let geometry = CardGeometry::layout(1.0, CardVariant::Enhanced);
        let record = ServerStatusRecord::offline("down.example.com", Some(25570), "timed out");

        let canvas = compose(&record, &geometry, &FontSet::builtin(), &CardLabels::default());

        assert_eq!(count_color(&canvas, 0, 0, 610, 430, GREEN), 0);
        // empty player value leaves the right value row blank
        assert_eq!(count_color(&canvas, 380, 204, 610, 230, WHITE), 0);
    }

    #[test]
    fn test_basic_card_hides_motd() {
        let geometry = CardGeometry::layout(1.0, CardVariant::Basic);
        let canvas = compose(
            &online_record(None),
            &geometry,
            &FontSet::builtin(),
            &CardLabels::default(),
        );

        assert_eq!(canvas.dimensions(), (560, 340));
        assert_eq!(count_color(&canvas, 0, 0, 560, 340, GREEN), 0);

        let shown = compose(
            &online_record(None),
            &geometry.with_motd(true),
            &FontSet::builtin(),
            &CardLabels::default(),
        );
        assert!(count_color(&shown, 0, 0, 560, 340, GREEN) > 0);
    }

    #[test]
    fn test_scaled_card_dimensions() {
        let geometry = CardGeometry::layout(2.0, CardVariant::Enhanced);
        let png = render(&online_record(None), &geometry, &FontSet::builtin(), &CardLabels::default()).unwrap();
        assert_eq!(decode(&png).dimensions(), (1220, 860));
    }
}
