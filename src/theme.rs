//! Theme colors for the UI.
//!
//! An optional `theme.conf` next to the app config overrides the built-in
//! palette, one `key #RRGGBB` pair per line.

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,      // active borders, selected menu entry
    pub success: Color,     // success alerts, positive card values
    pub warning: Color,     // warning alerts, pending totals
    pub danger: Color,      // error alerts, destructive confirms
    pub info: Color,        // info alerts and banners
    pub text: Color,        // primary text
    pub text_dim: Color,    // secondary text, hints
    pub bg_selected: Color, // selection background
    pub overlay: Color,     // drawer scrim and tooltip background
    pub inactive: Color,    // inactive borders
    pub header: Color,      // column headers, card titles
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(96, 165, 250),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            danger: Color::Rgb(248, 113, 113),
            info: Color::Rgb(125, 211, 252),
            text: Color::Rgb(229, 231, 235),
            text_dim: Color::Rgb(148, 163, 184),
            bg_selected: Color::Rgb(51, 65, 85),
            overlay: Color::Rgb(15, 23, 42),
            inactive: Color::Rgb(71, 85, 105),
            header: Color::Rgb(147, 197, 253),
        }
    }
}

impl Theme {
    /// Load the palette, applying any user overrides on top of defaults.
    pub fn load() -> Self {
        Self::load_user_theme().unwrap_or_default()
    }

    fn load_user_theme() -> Option<Self> {
        let path = dirs::config_dir()?.join("painel").join("theme.conf");
        let content = fs::read_to_string(path).ok()?;
        let colors = parse_palette(&content);
        if colors.is_empty() {
            return None;
        }

        let mut theme = Self::default();
        let overrides: [(&str, &mut Color); 11] = [
            ("accent", &mut theme.accent),
            ("success", &mut theme.success),
            ("warning", &mut theme.warning),
            ("danger", &mut theme.danger),
            ("info", &mut theme.info),
            ("text", &mut theme.text),
            ("text_dim", &mut theme.text_dim),
            ("bg_selected", &mut theme.bg_selected),
            ("overlay", &mut theme.overlay),
            ("inactive", &mut theme.inactive),
            ("header", &mut theme.header),
        ];
        for (key, slot) in overrides {
            if let Some(color) = colors.get(key) {
                *slot = *color;
            }
        }
        Some(theme)
    }
}

/// Parse `key #hexcolor` lines; comments and anything unparsable are
/// skipped.
fn parse_palette(content: &str) -> HashMap<String, Color> {
    let mut colors = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.splitn(2, char::is_whitespace).collect();
        if parts.len() == 2 {
            if let Some(color) = parse_hex_color(parts[1].trim()) {
                colors.insert(parts[0].trim().to_string(), color);
            }
        }
    }

    colors
}

/// Parse a hex color string (#RRGGBB or #RGB)
fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.trim().trim_start_matches('#');

    if s.len() == 6 {
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    } else if s.len() == 3 {
        let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
        Some(Color::Rgb(r, g, b))
    } else {
        None
    }
}
