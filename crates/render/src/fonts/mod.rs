//! Typefaces used by the card: TrueType files with a built-in bitmap fallback.

mod builtin;
mod truetype;

pub use builtin::BuiltinFace;
pub use truetype::TrueTypeFace;

use crate::FontError;
use motdcard_config::FontPaths;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Coverage mask of one rasterized character
#[derive(Debug, Clone, Default)]
pub struct Glyph {
    /// Offset from the pen position to the mask's left edge
    pub left: i32,
    /// Offset from the top of the text line to the mask's top edge
    pub top: i32,
    pub width: usize,
    pub height: usize,
    pub coverage: Vec<u8>,
}

/// Measurement and rasterization contract for a font at any pixel size
pub trait Typeface: Send + Sync {
    fn name(&self) -> &str;

    /// Horizontal distance the pen moves after drawing `ch`
    fn advance(&self, ch: char, px: f32) -> f32;

    /// Height of the inked bounding box of `ch`
    fn ink_height(&self, ch: char, px: f32) -> f32;

    fn rasterize(&self, ch: char, px: f32) -> Glyph;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Subtitle,
    Label,
    Value,
    Motd,
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontRole::Title => "title",
            FontRole::Subtitle => "subtitle",
            FontRole::Label => "label",
            FontRole::Value => "value",
            FontRole::Motd => "motd",
        };
        f.write_str(name)
    }
}

/// Faces for every text role, loaded once at startup and shared read-only
#[derive(Clone)]
pub struct FontSet {
    pub title: Arc<dyn Typeface>,
    pub subtitle: Arc<dyn Typeface>,
    pub label: Arc<dyn Typeface>,
    pub value: Arc<dyn Typeface>,
    pub motd: Arc<dyn Typeface>,
}

impl FontSet {
    /// Every role drawn with the built-in bitmap face
    pub fn builtin() -> Self {
        let face: Arc<dyn Typeface> = Arc::new(BuiltinFace);
        Self {
            title: Arc::clone(&face),
            subtitle: Arc::clone(&face),
            label: Arc::clone(&face),
            value: Arc::clone(&face),
            motd: face,
        }
    }

    /// Loads the configured font files.
    ///
    /// If any of the four label roles fails, all four fall back to the
    /// built-in face together. The MOTD face falls back on its own. Failures
    /// are returned so the caller can report them.
    pub fn load(paths: &FontPaths) -> (Self, Vec<(FontRole, FontError)>) {
        let mut loaded: HashMap<String, Arc<TrueTypeFace>> = HashMap::new();
        let mut failures = Vec::new();

        let mut load_role = |role: FontRole, path: &str| -> Option<Arc<dyn Typeface>> {
            if let Some(face) = loaded.get(path) {
                return Some(Arc::clone(face) as Arc<dyn Typeface>);
            }
            match TrueTypeFace::from_file(path) {
                Ok(face) => {
                    let face = Arc::new(face);
                    loaded.insert(path.to_string(), Arc::clone(&face));
                    Some(face as Arc<dyn Typeface>)
                }
                Err(e) => {
                    failures.push((role, e));
                    None
                }
            }
        };

        let title = load_role(FontRole::Title, &paths.title);
        let subtitle = load_role(FontRole::Subtitle, &paths.subtitle);
        let label = load_role(FontRole::Label, &paths.label);
        let value = load_role(FontRole::Value, &paths.value);
        let motd = load_role(FontRole::Motd, &paths.motd);

        let builtin: Arc<dyn Typeface> = Arc::new(BuiltinFace);
        let (title, subtitle, label, value) = match (title, subtitle, label, value) {
            (Some(title), Some(subtitle), Some(label), Some(value)) => (title, subtitle, label, value),
            _ => (
                Arc::clone(&builtin),
                Arc::clone(&builtin),
                Arc::clone(&builtin),
                Arc::clone(&builtin),
            ),
        };

        let fonts = Self {
            title,
            subtitle,
            label,
            value,
            motd: motd.unwrap_or(builtin),
        };
        (fonts, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files_fall_back_to_builtin() {
        let paths = FontPaths {
            title: "/nonexistent/title.ttf".to_string(),
            subtitle: "/nonexistent/subtitle.ttf".to_string(),
            label: "/nonexistent/label.ttf".to_string(),
            value: "/nonexistent/value.ttf".to_string(),
            motd: "/nonexistent/motd.ttf".to_string(),
        };

        let (fonts, failures) = FontSet::load(&paths);

        assert_eq!(failures.len(), 5);
        assert!(matches!(failures[0], (FontRole::Title, FontError::Read { .. })));
        for face in [&fonts.title, &fonts.subtitle, &fonts.label, &fonts.value, &fonts.motd] {
            assert_eq!(face.name(), BuiltinFace::NAME);
        }
    }

    #[test]
    fn test_unparsable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();
        let bogus = bogus.to_string_lossy().to_string();

        let paths = FontPaths {
            title: bogus.clone(),
            subtitle: bogus.clone(),
            label: bogus.clone(),
            value: bogus.clone(),
            motd: bogus,
        };
        let (fonts, failures) = FontSet::load(&paths);

        assert!(failures.iter().all(|(_, e)| matches!(e, FontError::Parse { .. })));
        assert_eq!(fonts.motd.name(), BuiltinFace::NAME);
    }
}
