use super::{Glyph, Typeface};
use crate::FontError;
use fontdue::{Font, FontSettings};
use std::path::Path;

/// Scalable TrueType/OpenType face rasterized with fontdue
pub struct TrueTypeFace {
    name: String,
    font: Font,
}

impl TrueTypeFace {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FontError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|source| FontError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_bytes(display, bytes)
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, FontError> {
        let name = name.into();
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| FontError::Parse {
            path: name.clone(),
            reason: reason.to_string(),
        })?;
        Ok(Self { name, font })
    }

    fn ascent(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map(|metrics| metrics.ascent)
            .unwrap_or(px * 0.8)
    }
}

impl Typeface for TrueTypeFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn advance(&self, ch: char, px: f32) -> f32 {
        self.font.metrics(ch, px).advance_width
    }

    fn ink_height(&self, ch: char, px: f32) -> f32 {
        self.font.metrics(ch, px).height as f32
    }

    fn rasterize(&self, ch: char, px: f32) -> Glyph {
        let (metrics, coverage) = self.font.rasterize(ch, px);
        let baseline = self.ascent(px).round() as i32;
        Glyph {
            left: metrics.xmin,
            top: baseline - (metrics.ymin + metrics.height as i32),
            width: metrics.width,
            height: metrics.height,
            coverage,
        }
    }
}
