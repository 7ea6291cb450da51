//! Theme configuration and color management
//!
//! Colors come from the `[colors]` section of `~/.config/listedit/config.toml`

use std::str::FromStr;

use ratatui::style::Color;
use serde::Deserialize;

/// `[colors]` section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    /// Foreground (text) color
    pub foreground: String,
    /// Focused row background color
    pub selection: String,
    /// Border color
    pub border: String,
    /// Border color of the focused region
    pub border_active: String,
    /// Accent for delete mode
    pub delete: String,
    /// Accent for edit mode
    pub edit: String,
    /// Status message color
    pub info: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            foreground: "default".to_string(),
            selection: "darkgray".to_string(),
            border: "default".to_string(),
            border_active: "cyan".to_string(),
            delete: "red".to_string(),
            edit: "yellow".to_string(),
            info: "blue".to_string(),
        }
    }
}

/// Parsed theme with ratatui Color values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub foreground: Color,
    pub selection: Color,
    pub border: Color,
    pub border_active: Color,
    pub delete: Color,
    pub edit: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ColorsConfig::default())
    }
}

impl Theme {
    /// Create theme from the `[colors]` config section
    pub fn from_config(colors: &ColorsConfig) -> Self {
        Self {
            foreground: parse_color(&colors.foreground),
            selection: parse_color(&colors.selection),
            border: parse_color(&colors.border),
            border_active: parse_color(&colors.border_active),
            delete: parse_color(&colors.delete),
            edit: parse_color(&colors.edit),
            info: parse_color(&colors.info),
        }
    }
}

/// Parse a color string into a ratatui Color
///
/// Accepts whatever `Color::from_str` does (names, `#rrggbb`, `0`-`255`)
/// plus `default`, `purple`, `colorN`, short `#rgb` and `rgb(r, g, b)`.
/// Anything else falls back to the terminal default.
pub fn parse_color(s: &str) -> Color {
    let s = s.trim().to_lowercase();
    match s.as_str() {
        "" | "default" => return Color::Reset,
        "purple" => return Color::Magenta,
        _ => {}
    }

    let extended = if let Some(n) = s.strip_prefix("color") {
        n.parse::<u8>().ok().map(Color::Indexed)
    } else if let Some(body) = s.strip_prefix("rgb(").and_then(|b| b.strip_suffix(')')) {
        rgb_components(body)
    } else {
        s.strip_prefix('#').and_then(short_hex)
    };

    extended
        .or_else(|| Color::from_str(&s).ok())
        .unwrap_or(Color::Reset)
}

/// `#rgb`, each digit doubled
fn short_hex(hex: &str) -> Option<Color> {
    if hex.len() != 3 || !hex.is_ascii() {
        return None;
    }
    let mut channels = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
    Some(Color::Rgb(channels.next()??, channels.next()??, channels.next()??))
}

/// `r, g, b` inside `rgb(...)`
fn rgb_components(body: &str) -> Option<Color> {
    let channels = body
        .split(',')
        .map(|part| part.trim().parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;
    match channels[..] {
        [r, g, b] => Some(Color::Rgb(r, g, b)),
        _ => None,
    }
}
