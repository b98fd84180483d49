const DEFAULT_SIZE: &str = "100";

/// Converts the `size` percentage into a card scale factor.
///
/// Unparsable, non-finite and non-positive values fall back to `1.0`;
/// anything above `max_scale` is clamped.
pub fn parse_scale(size: Option<&str>, max_scale: f64) -> f64 {
    let scale = size
        .unwrap_or(DEFAULT_SIZE)
        .trim()
        .parse::<f64>()
        .map(|percent| percent / 100.0)
        .unwrap_or(1.0);

    if !scale.is_finite() || scale <= 0.0 {
        return 1.0;
    }
    scale.min(max_scale)
}
