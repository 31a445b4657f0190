//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection. The
//! theme doubles as the style source the core resolves its tokens from:
//! colors are kept as `#RRGGBB` strings (the same space the backend palette
//! uses) and parsed into terminal colors only at draw time.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::render::StyleLookup;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic selection based on terminal
/// background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    // Tokens resolved by the core through StyleLookup
    text_color: &'static str,
    ok_color: &'static str,
    ok_symbol: &'static str,
    error_color: &'static str,
    error_symbol: &'static str,
    chart_background: &'static str,
    chart_capacity: usize,

    // Chrome used directly by the draw pass
    pub border: Color,
    pub header: Style,
    pub selected: Style,
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            text_color: "#E8E8E8",
            ok_color: "#4CAF50",
            ok_symbol: "✔",
            error_color: "#F44336",
            error_symbol: "✘",
            chart_background: "#3C3C3C",
            chart_capacity: 20,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            text_color: "#212121",
            ok_color: "#2E7D32",
            ok_symbol: "✔",
            error_color: "#B71C1C",
            error_symbol: "✘",
            chart_background: "#E0E0E0",
            chart_capacity: 20,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            selected: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }
}

impl StyleLookup for Theme {
    fn text_color(&self) -> &str {
        self.text_color
    }

    fn ok_color(&self) -> &str {
        self.ok_color
    }

    fn ok_symbol(&self) -> &str {
        self.ok_symbol
    }

    fn error_color(&self) -> &str {
        self.error_color
    }

    fn error_symbol(&self) -> &str {
        self.error_symbol
    }

    fn chart_background(&self) -> &str {
        self.chart_background
    }

    fn chart_capacity(&self) -> usize {
        self.chart_capacity
    }
}

/// Parse a `#RRGGBB` color token into a terminal color.
///
/// Unknown tokens fall back to the terminal default so a palette change on
/// the server can never break rendering.
pub fn parse_color(token: &str) -> Color {
    let hex = match token.strip_prefix('#') {
        Some(hex) if hex.len() == 6 => hex,
        _ => return Color::Reset,
    };

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_hex() {
        assert_eq!(parse_color("#4CAF50"), Color::Rgb(0x4C, 0xAF, 0x50));
        assert_eq!(parse_color("#000000"), Color::Rgb(0, 0, 0));
        assert_eq!(parse_color("#ffffff"), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_color_rejects_malformed_tokens() {
        assert_eq!(parse_color("4CAF50"), Color::Reset);
        assert_eq!(parse_color("#4CAF5"), Color::Reset);
        assert_eq!(parse_color("#GGGGGG"), Color::Reset);
        assert_eq!(parse_color(""), Color::Reset);
    }

    #[test]
    fn test_themes_expose_all_tokens() {
        for theme in [Theme::dark(), Theme::light()] {
            assert!(theme.text_color().starts_with('#'));
            assert!(theme.ok_color().starts_with('#'));
            assert!(theme.error_color().starts_with('#'));
            assert!(theme.chart_background().starts_with('#'));
            assert!(!theme.ok_symbol().is_empty());
            assert!(!theme.error_symbol().is_empty());
            assert!(theme.chart_capacity() > 0);
        }
    }
}
