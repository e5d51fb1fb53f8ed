use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    /// Checkbox / done-task accent
    pub done: Color,
    /// Editing-mode and move-mode accent
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6A, 0x6A, 0x80),
            highlight: Color::Rgb(0x2E, 0x2E, 0x48),
            done: Color::Rgb(0x44, 0xCC, 0x77),
            accent: Color::Rgb(0xE8, 0xA3, 0x3D),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from [ui.colors] config overrides, falling back to
    /// defaults. Unknown slot names and unparseable values are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (name, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match name.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "highlight" => theme.highlight = color,
                "done" => theme.done = color,
                "accent" => theme.accent = color,
                _ => {}
            }
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color_valid() {
        assert_eq!(parse_hex_color("#FF4444"), Some(Color::Rgb(0xFF, 0x44, 0x44)));
        assert_eq!(parse_hex_color("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color("FF4444"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn from_config_applies_known_slots_only() {
        let mut ui = UiConfig::default();
        ui.colors.insert("highlight".into(), "#112233".into());
        ui.colors.insert("no_such_slot".into(), "#445566".into());
        ui.colors.insert("done".into(), "not a color".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.highlight, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.done, Theme::default().done);
    }
}
