//! UI theme: every configurable color in one place, out of the render code.

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub muted_fg: Color,
    pub header_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub danger_fg: Color,
    pub premium_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Indexed(6),    // Cyan
            inactive_border: Color::Indexed(8), // DarkGray
            accent_fg: Color::Indexed(4),       // Blue
            muted_fg: Color::Indexed(7),        // Gray
            header_fg: Color::Indexed(15),      // White
            selected_bg: Color::Indexed(8),     // DarkGray
            selected_fg: Color::Indexed(15),    // White
            danger_fg: Color::Indexed(9),       // LightRed
            premium_fg: Color::Indexed(3),      // Yellow
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    /// Unknown color names keep the current value.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        apply_color(&mut self.focus_border, &settings.focus_border);
        apply_color(&mut self.inactive_border, &settings.inactive_border);
        apply_color(&mut self.accent_fg, &settings.accent_fg);
        apply_color(&mut self.muted_fg, &settings.muted_fg);
        apply_color(&mut self.header_fg, &settings.header_fg);
        apply_color(&mut self.selected_bg, &settings.selected_bg);
        apply_color(&mut self.selected_fg, &settings.selected_fg);
        apply_color(&mut self.danger_fg, &settings.danger_fg);
        apply_color(&mut self.premium_fg, &settings.premium_fg);
    }

    pub fn border(&self, focused: bool) -> Color {
        if focused {
            self.focus_border
        } else {
            self.inactive_border
        }
    }
}

fn apply_color(slot: &mut Color, value: &Option<String>) {
    let Some(value) = value else {
        return;
    };
    match parse_color(value) {
        Some(color) => *slot = color,
        None => tracing::warn!(value = %value, "unknown theme color"),
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" | "dark_grey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
