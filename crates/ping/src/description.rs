//! Chat component descriptions flattened into legacy `§` text.

use motdcard_models::Rgb;
use motdcard_motd::palette::{code_for_name, nearest_code};
use motdcard_motd::CODE_SENTINEL;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Style {
    color: Option<char>,
    obfuscated: bool,
    bold: bool,
    strikethrough: bool,
    underlined: bool,
    italic: bool,
}

impl Style {
    fn inherit(&self, component: &Map<String, Value>) -> Style {
        let flag = |key: &str, inherited: bool| {
            component.get(key).and_then(Value::as_bool).unwrap_or(inherited)
        };

        Style {
            color: component
                .get("color")
                .and_then(Value::as_str)
                .and_then(parse_color)
                .or(self.color),
            obfuscated: flag("obfuscated", self.obfuscated),
            bold: flag("bold", self.bold),
            strikethrough: flag("strikethrough", self.strikethrough),
            underlined: flag("underlined", self.underlined),
            italic: flag("italic", self.italic),
        }
    }

    fn codes(&self) -> Vec<char> {
        let mut codes = vec![self.color.unwrap_or('r')];
        for (enabled, code) in [
            (self.obfuscated, 'k'),
            (self.bold, 'l'),
            (self.strikethrough, 'm'),
            (self.underlined, 'n'),
            (self.italic, 'o'),
        ] {
            if enabled {
                codes.push(code);
            }
        }
        codes
    }
}

fn parse_color(color: &str) -> Option<char> {
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        let rgb = Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8);
        return Some(nearest_code(rgb));
    }
    code_for_name(color)
}

struct Flattener {
    out: String,
    emitted: Style,
}

impl Flattener {
    fn push_text(&mut self, text: &str, style: &Style) {
        if text.is_empty() {
            return;
        }
        if *style != self.emitted {
            for code in style.codes() {
                self.out.push(CODE_SENTINEL);
                self.out.push(code);
            }
            self.emitted = style.clone();
        }
        self.out.push_str(text);
    }

    fn visit(&mut self, value: &Value, parent: &Style) {
        match value {
            Value::String(text) => self.push_text(text, parent),
            Value::Array(items) => {
                for item in items {
                    self.visit(item, parent);
                }
            }
            Value::Object(component) => {
                let style = parent.inherit(component);
                if let Some(text) = component.get("text").and_then(Value::as_str) {
                    self.push_text(text, &style);
                }
                if let Some(Value::Array(extra)) = component.get("extra") {
                    for child in extra {
                        self.visit(child, &style);
                    }
                }
            }
            Value::Number(n) => self.push_text(&n.to_string(), parent),
            Value::Bool(_) | Value::Null => {}
        }
    }
}

/// Flattens a status `description` (plain string or chat component) into
/// legacy-coded text. Plain strings are returned untouched.
pub fn flatten_description(description: &Value) -> String {
    let mut flattener = Flattener {
        out: String::new(),
        emitted: Style::default(),
    };
    flattener.visit(description, &Style::default());
    flattener.out
}
