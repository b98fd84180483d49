use super::palette::{lookup, CODE_SENTINEL};
use motdcard_models::{Rgb, StyledLine, StyledSegment};
use regex::Regex;
use std::sync::LazyLock;

/// Newlines and HTML-style breaks (`<br>`, `<br/>`, `<br />`, any case)
static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|\n").expect("line break pattern is valid")
});

/// Splits raw MOTD text into its visual lines
pub fn split_lines(raw: &str) -> Vec<&str> {
    LINE_BREAK.split(raw).collect()
}

/// Parses a MOTD into colored runs, one `StyledLine` per visual line.
///
/// Every line starts at `default_color`. Recognized codes switch the active
/// color; unknown codes are consumed without effect. Runs are maximal, so a
/// segment only ends where the active color actually changes.
pub fn parse(raw: &str, default_color: Rgb) -> Vec<StyledLine> {
    split_lines(raw)
        .into_iter()
        .enumerate()
        .map(|(index, line)| StyledLine {
            index,
            segments: parse_line(index, line, default_color),
        })
        .collect()
}

fn parse_line(line_index: usize, line: &str, default_color: Rgb) -> Vec<StyledSegment> {
    let mut segments = Vec::new();
    let mut current = default_color;
    let mut run = String::new();
    let mut run_color = default_color;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        if ch == CODE_SENTINEL {
            if let Some(code) = chars.next() {
                if let Some(color) = lookup(code) {
                    current = color;
                }
                continue;
            }
        }

        if current != run_color && !run.is_empty() {
            segments.push(StyledSegment {
                line_index,
                text: std::mem::take(&mut run),
                color: run_color,
            });
        }
        run_color = current;
        run.push(ch);
    }

    if !run.is_empty() {
        segments.push(StyledSegment {
            line_index,
            text: run,
            color: run_color,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE;
    use crate::strip_codes;

    const RED: Rgb = Rgb(255, 85, 85);
    const GREEN: Rgb = Rgb(85, 255, 85);

    #[test]
    fn test_every_code_maps_to_palette() {
        for (code, rgb) in PALETTE {
            let raw = format!("§{}x", code);
            let lines = parse(&raw, Rgb(1, 2, 3));

            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].segments.len(), 1);
            assert_eq!(lines[0].segments[0].text, "x");
            assert_eq!(lines[0].segments[0].color, rgb, "code {}", code);
        }
    }

    #[test]
    fn test_uppercase_codes() {
        let lines = parse("§Cred", Rgb::WHITE);
        assert_eq!(lines[0].segments[0].color, RED);
    }

    #[test]
    fn test_unknown_code_keeps_color() {
        let lines = parse("§chi§zbye", Rgb::WHITE);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].plain_text(), "hibye");
        assert!(lines[0].segments.iter().all(|s| s.color == RED));
    }

    #[test]
    fn test_color_change_splits_runs() {
        let lines = parse("§aWelcome §cto §cthe server", Rgb::WHITE);
        let segments = &lines[0].segments;

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Welcome ");
        assert_eq!(segments[0].color, GREEN);
        assert_eq!(segments[1].text, "to the server");
        assert_eq!(segments[1].color, RED);
    }

    #[test]
    fn test_line_splitting_resets_color() {
        let lines = parse("§ca<br>b\nc<BR />d<br/>e", Rgb::WHITE);

        let texts: Vec<String> = lines.iter().map(|l| l.plain_text()).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(lines[0].segments[0].color, RED);
        for line in &lines[1..] {
            assert_eq!(line.segments[0].color, Rgb::WHITE);
        }
    }

    #[test]
    fn test_spec_line_example() {
        let lines = parse("a<br>b\nc", Rgb::WHITE);

        assert_eq!(lines.len(), 3);
        for (idx, (line, expected)) in lines.iter().zip(["a", "b", "c"]).enumerate() {
            assert_eq!(line.index, idx);
            assert_eq!(line.plain_text(), expected);
            assert_eq!(line.segments[0].line_index, idx);
            assert_eq!(line.segments[0].color, Rgb::WHITE);
        }
    }

    #[test]
    fn test_trailing_sentinel_is_literal() {
        let lines = parse("§aend§", Rgb::WHITE);

        assert_eq!(lines[0].plain_text(), "end§");
        assert_eq!(lines[0].segments[0].color, GREEN);
    }

    #[test]
    fn test_empty_lines_keep_their_index() {
        let lines = parse("top\n\n§abottom", Rgb::WHITE);

        assert_eq!(lines.len(), 3);
        assert!(lines[1].is_empty());
        assert_eq!(lines[2].index, 2);
        assert_eq!(lines[2].segments[0].line_index, 2);
    }

    #[test]
    fn test_whitespace_preserved() {
        let lines = parse("  §a spaced  ", Rgb::WHITE);

        assert_eq!(lines[0].segments[0].text, "  ");
        assert_eq!(lines[0].segments[1].text, " spaced  ");
    }

    #[test]
    fn test_segments_reconstruct_stripped_text() {
        let raw = "§6§lHypixel Network §c[1.8-1.21]\n§b§lSKYBLOCK §e§lUPDATE";
        let lines = parse(raw, Rgb::WHITE);
        let rebuilt: Vec<String> = lines.iter().map(|l| l.plain_text()).collect();

        assert_eq!(rebuilt.join("\n"), strip_codes(raw));
    }
}
