use motdcard_config::CardVariant;

const ENHANCED_SIZE: (f64, f64) = (610.0, 430.0);
const BASIC_SIZE: (f64, f64) = (560.0, 340.0);

const FAVICON_ANCHOR: (f64, f64) = (60.0, 48.0);
const FAVICON_SIZE: f64 = 64.0;
const FAVICON_RADIUS: f64 = 10.0;
const CAPTION_ANCHOR: (f64, f64) = (140.0, 46.0);
const TITLE_ANCHOR: (f64, f64) = (140.0, 63.0);
const SECTION_ANCHOR: (f64, f64) = (60.0, 125.0);

const LEFT_X: f64 = 60.0;
const RIGHT_X: f64 = 380.0;
const ROW_Y: f64 = 180.0;
const ROW_STEP: f64 = 60.0;
const VALUE_OFFSET: f64 = 24.0;
const MOTD_TEXT_OFFSET: f64 = 32.0;
const MOTD_LINE_SPACING: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// One column of label/value rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoColumn {
    pub x: u32,
    pub first_row_y: u32,
    pub row_step: u32,
    pub value_offset: u32,
}

impl InfoColumn {
    /// Label and value anchors of row `index`
    pub fn row(&self, index: u32) -> (Point, Point) {
        let y = self.first_row_y + index * self.row_step;
        (
            Point { x: self.x, y },
            Point {
                x: self.x,
                y: y + self.value_offset,
            },
        )
    }
}

/// Pixel sizes of each text role
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub title: f32,
    pub subtitle: f32,
    pub label: f32,
    pub value: f32,
    pub motd: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardGeometry {
    pub variant: CardVariant,
    pub scale: f64,
    pub width: u32,
    pub height: u32,
    pub favicon: Point,
    pub favicon_size: u32,
    pub favicon_radius: u32,
    pub caption: Point,
    pub title: Point,
    pub section: Point,
    pub left: InfoColumn,
    pub right: InfoColumn,
    pub motd_header: Point,
    pub motd_text: Point,
    pub motd_line_spacing: u32,
    pub show_motd: bool,
    pub fonts: FontSizes,
}

impl CardGeometry {
    /// Positions every fixed field for `scale`. The caller guarantees a
    /// positive, finite scale.
    pub fn layout(scale: f64, variant: CardVariant) -> Self {
        let scaled = |v: f64| (v * scale) as u32;
        let point = |(x, y): (f64, f64)| Point {
            x: scaled(x),
            y: scaled(y),
        };
        let column = |x: f64| InfoColumn {
            x: scaled(x),
            first_row_y: scaled(ROW_Y),
            row_step: scaled(ROW_STEP),
            value_offset: scaled(VALUE_OFFSET),
        };

        let (width, height) = match variant {
            CardVariant::Enhanced => ENHANCED_SIZE,
            CardVariant::Basic => BASIC_SIZE,
        };
        let motd_header = point((LEFT_X, ROW_Y + 2.0 * ROW_STEP));
        let size = |v: f64| (v * scale) as f32;

        Self {
            variant,
            scale,
            width: scaled(width).max(1),
            height: scaled(height).max(1),
            favicon: point(FAVICON_ANCHOR),
            favicon_size: scaled(FAVICON_SIZE),
            favicon_radius: scaled(FAVICON_RADIUS),
            caption: point(CAPTION_ANCHOR),
            title: point(TITLE_ANCHOR),
            section: point(SECTION_ANCHOR),
            left: column(LEFT_X),
            right: column(RIGHT_X),
            motd_header,
            motd_text: Point {
                x: motd_header.x,
                y: motd_header.y + scaled(MOTD_TEXT_OFFSET),
            },
            motd_line_spacing: scaled(MOTD_LINE_SPACING),
            show_motd: variant == CardVariant::Enhanced,
            fonts: FontSizes {
                title: size(36.0),
                subtitle: size(16.0),
                label: size(20.0),
                value: size(22.0),
                motd: size(21.0),
            },
        }
    }

    /// Overrides whether the MOTD block is drawn
    pub fn with_motd(mut self, show_motd: bool) -> Self {
        self.show_motd = show_motd;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhanced_base_geometry() {
        let g = CardGeometry::layout(1.0, CardVariant::Enhanced);

        assert_eq!((g.width, g.height), (610, 430));
        assert_eq!(g.favicon, Point { x: 60, y: 48 });
        assert_eq!((g.favicon_size, g.favicon_radius), (64, 10));
        assert_eq!(g.title, Point { x: 140, y: 63 });
        assert_eq!(g.left.row(1), (Point { x: 60, y: 240 }, Point { x: 60, y: 264 }));
        assert_eq!(g.right.row(0).1, Point { x: 380, y: 204 });
        assert_eq!(g.motd_header, Point { x: 60, y: 300 });
        assert_eq!(g.motd_text, Point { x: 60, y: 332 });
        assert!(g.show_motd);
        assert_eq!(g.fonts.value, 22.0);
    }

    #[test]
    fn test_scale_doubles_every_coordinate() {
        let one = CardGeometry::layout(1.0, CardVariant::Enhanced);
        let two = CardGeometry::layout(2.0, CardVariant::Enhanced);

        assert_eq!((two.width, two.height), (one.width * 2, one.height * 2));
        assert_eq!(two.favicon.x, one.favicon.x * 2);
        assert_eq!(two.section.y, one.section.y * 2);
        assert_eq!(two.right.row(1).1.y, one.right.row(1).1.y * 2);
        assert_eq!(two.motd_text.y, one.motd_text.y * 2);
        assert_eq!(two.motd_line_spacing, 8);
        assert_eq!(two.fonts.title, 72.0);
    }

    #[test]
    fn test_fractional_scale_truncates() {
        let g = CardGeometry::layout(0.5, CardVariant::Enhanced);
        assert_eq!((g.width, g.height), (305, 215));
        assert_eq!(g.caption, Point { x: 70, y: 23 });
        assert_eq!(g.title.y, 31);
    }

    #[test]
    fn test_basic_variant() {
        let g = CardGeometry::layout(1.0, CardVariant::Basic);
        assert_eq!((g.width, g.height), (560, 340));
        assert!(!g.show_motd);
        assert!(g.with_motd(true).show_motd);
    }

    #[test]
    fn test_tiny_scale_keeps_canvas_nonempty() {
        let g = CardGeometry::layout(0.001, CardVariant::Basic);
        assert_eq!((g.width, g.height), (1, 1));
    }
}
