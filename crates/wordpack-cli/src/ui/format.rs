//! Formatting helpers for durations and color swatches.

use std::time::Duration;

use owo_colors::Style;

use super::messages::paint;

/// Format a duration in the most fitting unit.
///
/// ```
/// use std::time::Duration;
/// use wordpack_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// A block of `hex` color followed by the hex string.
///
/// Falls back to the bare string when `hex` is not `#rrggbb` or colors are off.
pub fn swatch(hex: &str) -> String {
    match parse_rgb(hex) {
        Some((r, g, b)) if super::colors_enabled() => {
            format!("{} {}", paint("  ", Style::new().on_truecolor(r, g, b)), hex)
        }
        _ => hex.to_string(),
    }
}

fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
    }

    #[test]
    fn test_format_duration_seconds_and_minutes() {
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn swatch_parses_full_hex_only() {
        assert_eq!(parse_rgb("#610000"), Some((0x61, 0, 0)));
        assert_eq!(parse_rgb("#fff"), None);
        assert_eq!(swatch("not-a-color"), "not-a-color");
        assert!(swatch("#ffffff").ends_with("#ffffff"));
    }
}
