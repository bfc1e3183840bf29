//! Color utilities for theme definitions

use gpui::{rgba, Hsla};

/// Parse a hex color string to Hsla
/// Supports formats: #RGB, #RRGGBB, #RRGGBBAA
pub fn hex(color: &str) -> Hsla {
    parse_hex(color).map(|value| rgba(value).into()).unwrap_or_else(Hsla::black)
}

/// `#RGB`, `#RRGGBB` or `#RRGGBBAA` as `0xRRGGBBAA`
fn parse_hex(color: &str) -> Option<u32> {
    let digits = color.trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match digits.len() {
        3 => {
            let doubled: String = digits.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&doubled, 16).ok().map(|v| (v << 8) | 0xff)
        }
        6 => u32::from_str_radix(digits, 16).ok().map(|v| (v << 8) | 0xff),
        8 => u32::from_str_radix(digits, 16).ok(),
        _ => None,
    }
}

/// Translucent black used behind dialogs and the busy overlay
pub fn scrim(alpha: f32) -> Hsla {
    Hsla {
        h: 0.0,
        s: 0.0,
        l: 0.0,
        a: alpha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_formats() {
        assert_eq!(parse_hex("#ffffff"), Some(0xffffffff));
        assert_eq!(parse_hex("#fff"), Some(0xffffffff));
        assert_eq!(parse_hex("#11223380"), Some(0x11223380));
        assert_eq!(parse_hex("#12"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn test_hex_lightness() {
        let white = hex("#ffffff");
        assert!((white.l - 1.0).abs() < 0.01);

        let red = hex("#ff0000");
        assert!((red.h - 0.0).abs() < 0.01);
        assert!((red.s - 1.0).abs() < 0.01);
    }
}
