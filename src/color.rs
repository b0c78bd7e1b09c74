//! Colour strings as they appear in the settings file.

use crate::prelude::*;

/// Named colours accepted in the settings file, with their X11 values.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xff, 0xff, 0xff]),
    ("red", [0xff, 0x00, 0x00]),
    ("lime", [0x00, 0xff, 0x00]),
    ("green", [0x00, 0xff, 0x00]),
    ("darkgreen", [0x00, 0x64, 0x00]),
    ("blue", [0x00, 0x00, 0xff]),
    ("navy", [0x00, 0x00, 0x80]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("aqua", [0x00, 0xff, 0xff]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("fuchsia", [0xff, 0x00, 0xff]),
    ("gray", [0xbe, 0xbe, 0xbe]),
    ("grey", [0xbe, 0xbe, 0xbe]),
    ("darkgray", [0xa9, 0xa9, 0xa9]),
    ("darkgrey", [0xa9, 0xa9, 0xa9]),
    ("silver", [0xc0, 0xc0, 0xc0]),
    ("orange", [0xff, 0xa5, 0x00]),
    ("purple", [0xa0, 0x20, 0xf0]),
    ("maroon", [0xb0, 0x30, 0x60]),
    ("olive", [0x80, 0x80, 0x00]),
    ("teal", [0x00, 0x80, 0x80]),
    ("pink", [0xff, 0xc0, 0xcb]),
    ("brown", [0xa5, 0x2a, 0x2a]),
    ("beige", [0xf5, 0xf5, 0xdc]),
    ("wheat", [0xf5, 0xde, 0xb3]),
];

fn hex_digits(digits: &str) -> Option<Vec<u8>> {
    digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect()
}

/// Parse `#rgb`, `#rrggbb`, `#rrrrggggbbbb` or a colour name.
pub fn parse_color(value: &str) -> Result<Color32, AppError> {
    let unknown = || AppError::UnknownColor(value.to_string());
    let lowered = value.trim().to_ascii_lowercase();

    if let Some(hex) = lowered.strip_prefix('#') {
        let digits = hex_digits(hex).ok_or_else(unknown)?;
        let width = match digits.len() {
            3 | 6 | 12 => digits.len() / 3,
            _ => return Err(unknown()),
        };
        let channel = |i: usize| {
            let start = i * width;
            match width {
                1 => digits[start] * 17,
                // Only the high byte matters for 16-bit channels.
                _ => digits[start] * 16 + digits[start + 1],
            }
        };
        return Ok(Color32::from_rgb(channel(0), channel(1), channel(2)));
    }

    let name: String = lowered.chars().filter(|c| !c.is_whitespace()).collect();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, [r, g, b])| Color32::from_rgb(*r, *g, *b))
        .ok_or_else(unknown)
}

/// Format a colour the way picked colours are stored.
pub fn format_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Parse `value`, falling back to `fallback` and reporting to `logger`.
pub fn parse_color_or(value: &str, fallback: &str, logger: &mut UiLogger) -> Color32 {
    match parse_color(value) {
        Ok(color) => color,
        Err(e) => {
            logger.warn(format!("{e}, using {fallback}"), None);
            parse_color(fallback).unwrap_or(Color32::BLACK)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_known_names() {
        assert_eq!(parse_color("black").unwrap(), Color32::BLACK);
        assert_eq!(parse_color("lime").unwrap(), Color32::from_rgb(0, 255, 0));
        assert_eq!(parse_color(" Dark Green ").unwrap(), Color32::from_rgb(0, 100, 0));
    }

    #[test]
    fn hex_forms() {
        assert_eq!(parse_color("#fff").unwrap(), Color32::WHITE);
        assert_eq!(parse_color("#1A2b3C").unwrap(), Color32::from_rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(
            parse_color("#ffff80800000").unwrap(),
            Color32::from_rgb(0xff, 0x80, 0x00)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_color("#12"), Err(AppError::UnknownColor(_))));
        assert!(matches!(parse_color("#ggg"), Err(AppError::UnknownColor(_))));
        assert!(matches!(parse_color("chartreuse-ish"), Err(AppError::UnknownColor(_))));
    }

    #[test]
    fn formatted_colours_parse_back() {
        let color = Color32::from_rgb(0x0a, 0xb0, 0xff);
        assert_eq!(format_color(color), "#0ab0ff");
        assert_eq!(parse_color(&format_color(color)).unwrap(), color);
    }

    #[test]
    fn fallback_reports_a_warning() {
        let mut logger = UiLogger::new();
        let color = parse_color_or("nope", "lime", &mut logger);
        assert_eq!(color, Color32::from_rgb(0, 255, 0));
        assert!(matches!(logger.message, Some((_, UiLogLevel::Warning))));
    }
}
