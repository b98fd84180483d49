//! The 16-color legacy palette plus the `r` reset code.

use motdcard_models::Rgb;

/// Prefix of every two-character formatting code
pub const CODE_SENTINEL: char = '§';

pub const PALETTE: [(char, Rgb); 17] = [
    ('0', Rgb(0, 0, 0)),
    ('1', Rgb(0, 0, 170)),
    ('2', Rgb(0, 170, 0)),
    ('3', Rgb(0, 170, 170)),
    ('4', Rgb(170, 0, 0)),
    ('5', Rgb(170, 0, 170)),
    ('6', Rgb(255, 170, 0)),
    ('7', Rgb(170, 170, 170)),
    ('8', Rgb(85, 85, 85)),
    ('9', Rgb(85, 85, 255)),
    ('a', Rgb(85, 255, 85)),
    ('b', Rgb(85, 255, 255)),
    ('c', Rgb(255, 85, 85)),
    ('d', Rgb(255, 85, 255)),
    ('e', Rgb(255, 255, 85)),
    ('f', Rgb(255, 255, 255)),
    ('r', Rgb(255, 255, 255)),
];

/// Chat component color names, indexed like the first 16 palette entries
const COLOR_NAMES: [&str; 16] = [
    "black",
    "dark_blue",
    "dark_green",
    "dark_aqua",
    "dark_red",
    "dark_purple",
    "gold",
    "gray",
    "dark_gray",
    "blue",
    "green",
    "aqua",
    "red",
    "light_purple",
    "yellow",
    "white",
];

/// Looks up a code character, case-insensitively
pub fn lookup(code: char) -> Option<Rgb> {
    let code = code.to_ascii_lowercase();
    PALETTE
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, rgb)| *rgb)
}

/// Maps a chat component color name (`"dark_red"`, `"reset"`) to its code
pub fn code_for_name(name: &str) -> Option<char> {
    if name == "reset" {
        return Some('r');
    }
    COLOR_NAMES
        .iter()
        .position(|n| *n == name)
        .map(|idx| PALETTE[idx].0)
}

/// Closest of the 16 colors by squared RGB distance
pub fn nearest_code(color: Rgb) -> char {
    let distance = |rgb: &Rgb| {
        let dr = i32::from(rgb.0) - i32::from(color.0);
        let dg = i32::from(rgb.1) - i32::from(color.1);
        let db = i32::from(rgb.2) - i32::from(color.2);
        dr * dr + dg * dg + db * db
    };

    PALETTE[..16]
        .iter()
        .min_by_key(|(_, rgb)| distance(rgb))
        .map(|(code, _)| *code)
        .unwrap_or('f')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup('c'), Some(Rgb(255, 85, 85)));
        assert_eq!(lookup('C'), Some(Rgb(255, 85, 85)));
        assert_eq!(lookup('r'), Some(Rgb::WHITE));
        assert_eq!(lookup('z'), None);
        assert_eq!(lookup('l'), None);
    }

    #[test]
    fn test_code_for_name() {
        assert_eq!(code_for_name("gold"), Some('6'));
        assert_eq!(code_for_name("light_purple"), Some('d'));
        assert_eq!(code_for_name("reset"), Some('r'));
        assert_eq!(code_for_name("#ff0000"), None);
    }

    #[test]
    fn test_nearest_code() {
        assert_eq!(nearest_code(Rgb(250, 80, 90)), 'c');
        assert_eq!(nearest_code(Rgb(0, 0, 0)), '0');
        assert_eq!(nearest_code(Rgb(250, 250, 250)), 'f');
    }
}
