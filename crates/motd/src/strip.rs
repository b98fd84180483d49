use super::palette::CODE_SENTINEL;

/// Removes every two-character `§X` code in a single pass.
///
/// `X` may be any character except a newline, so unknown codes are removed
/// as well. A `§` at the end of the text, or right before a newline, is kept.
pub fn strip_codes(raw: &str) -> String {
    let mut plain = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == CODE_SENTINEL {
            if let Some(&next) = chars.peek() {
                if next != '\n' {
                    chars.next();
                    continue;
                }
            }
        }
        plain.push(ch);
    }

    plain
}
