//! Theme support for the fanfold widgets.
//!
//! Provides named color schemes with the gradient stop pairs used by
//! [`GradientLabel`](crate::widgets::GradientLabel) and
//! [`PillButton`](crate::widgets::PillButton), the slot colors used by the
//! showcase menu adapter, and a centralized [`ThemeManager`].
//!
//! # Examples
//!
//! ```
//! use fanfold::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula label gradient: {:?}", dracula.colors.label_gradient);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering all widget elements.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Base colors
    pub background: Color32,
    pub panel_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Gradient stop pairs (start, end)
    pub label_gradient: (Color32, Color32),
    pub button_gradient: (Color32, Color32),

    // Pill button accents
    pub button_border: Color32,
    pub button_text: Color32,

    // Menu slot colors
    pub slot_normal: Color32,
    pub slot_clicked: Color32,
    pub slot_icon: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all built-in themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes.
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Dracula".to_string(), dracula_theme());

        Self {
            themes,
            current_theme_name: "Dark".to_string(),
        }
    }

    /// Retrieves a theme by name.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a sorted list of all available theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme.
    pub fn current_theme(&self) -> &Theme {
        &self.themes[&self.current_theme_name]
    }

    /// Sets the current theme by name.
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.background;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.border;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme.
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with warm gradients".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(255, 255, 255),
            panel_background: Color32::from_rgb(248, 248, 248),
            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),

            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),

            label_gradient: (hex_to_color32("#e96443"), hex_to_color32("#904e95")),
            button_gradient: (hex_to_color32("#f5af19"), hex_to_color32("#f12711")),

            button_border: Color32::from_rgb(160, 160, 160),
            button_text: Color32::from_rgb(255, 255, 255),

            slot_normal: hex_to_color32("#4a90d9"),
            slot_clicked: hex_to_color32("#f39c12"),
            slot_icon: Color32::from_rgb(255, 255, 255),
        },
    }
}

/// Creates the Dark theme.
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with cool gradients".to_string(),
        colors: ThemeColors {
            background: Color32::from_rgb(16, 16, 16),
            panel_background: Color32::from_rgb(39, 39, 39),
            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),

            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),

            label_gradient: (hex_to_color32("#36d1dc"), hex_to_color32("#5b86e5")),
            button_gradient: (hex_to_color32("#11998e"), hex_to_color32("#38ef7d")),

            button_border: Color32::from_rgb(100, 100, 100),
            button_text: Color32::from_rgb(16, 16, 16),

            slot_normal: hex_to_color32("#2c3e50"),
            slot_clicked: hex_to_color32("#e74c3c"),
            slot_icon: Color32::from_rgb(236, 240, 241),
        },
    }
}

/// Creates the Dracula theme.
///
/// Official colors from: https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Official Dracula theme color palette".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#21222c"),
            panel_background: hex_to_color32("#282a36"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),

            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),

            label_gradient: (hex_to_color32("#ff79c6"), hex_to_color32("#bd93f9")),
            button_gradient: (hex_to_color32("#8be9fd"), hex_to_color32("#50fa7b")),

            button_border: hex_to_color32("#6272a4"),
            button_text: hex_to_color32("#282a36"),

            slot_normal: hex_to_color32("#44475a"),
            slot_clicked: hex_to_color32("#ffb86c"),
            slot_icon: hex_to_color32("#f8f8f2"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker).
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}

/// Sets the alpha channel of a color.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Linearly interpolates between two colors at fraction `t` in `[0, 1]`.
pub fn lerp_color(start: Color32, end: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(
        lerp(start.r(), end.r()),
        lerp(start.g(), end.g()),
        lerp(start.b(), end.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(hex_to_color32("#ff79c6"), Color32::from_rgb(255, 121, 198));
        assert_eq!(hex_to_color32("282a36"), Color32::from_rgb(40, 42, 54));
        // Malformed input falls back to black
        assert_eq!(hex_to_color32("#fff"), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn lerp_color_endpoints() {
        let a = Color32::from_rgb(0, 100, 200);
        let b = Color32::from_rgb(200, 100, 0);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color32::from_rgb(100, 100, 100));
    }

    #[test]
    fn manager_lists_and_switches_themes() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.list_themes(), vec!["Dark", "Dracula", "Light"]);
        assert_eq!(manager.current_theme().name, "Dark");

        manager.set_current_theme("Dracula").unwrap();
        assert_eq!(manager.current_theme().name, "Dracula");

        assert!(manager.set_current_theme("Nope").is_err());
        assert_eq!(manager.current_theme().name, "Dracula");
    }
}
