use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    /// Open task titles
    pub text: Color,
    /// Headings and the title being edited
    pub text_bright: Color,
    /// Marker outline, hints, disabled controls
    pub dim: Color,
    /// Done marker fill and done titles
    pub done: Color,
    /// Active controls and the status accent
    pub highlight: Color,
    /// Background of the cursor row
    pub selection_bg: Color,
    /// Separator between the edit and delete controls
    pub divider: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x12, 0x12, 0x14),
            text: Color::Rgb(0xB2, 0xB2, 0xB2),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x5C, 0x5C, 0x66),
            done: Color::Rgb(0x1D, 0xB8, 0x63),
            highlight: Color::Rgb(0x88, 0x84, 0xFF),
            selection_bg: Color::Rgb(0x2A, 0x27, 0x44),
            divider: Color::Rgb(0x3A, 0x3A, 0x3A),
        }
    }
}

/// Parse a hex color string like "#1DB863" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults.
    /// Unknown keys and malformed colors are skipped.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring malformed color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "done" => theme.done = color,
                "highlight" => theme.highlight = color,
                "selection_bg" => theme.selection_bg = color,
                "divider" => theme.divider = color,
                _ => tracing::warn!(key = %key, "ignoring unknown color key"),
            }
        }
        theme
    }

    /// Title color for a task
    pub fn title_color(&self, done: bool) -> Color {
        if done { self.done } else { self.text }
    }
}
