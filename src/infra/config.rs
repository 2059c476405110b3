//! Theme registry loaded from `yamls/themes.yaml` (embedded at compile time).
use std::collections::HashMap;
use std::sync::{LazyLock, RwLock};

use serde::Deserialize;

// ============================================================================
// Theme Configuration
// ============================================================================

#[derive(Debug, Deserialize, Clone)]
pub struct ThemesConfig {
    pub themes: HashMap<String, Theme>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub icons: ThemeIcons,
    pub colors: ThemeColors,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeIcons {
    pub pointer: String,
    pub opened: String,
}

/// RGB color as [r, g, b] array
pub type RgbColor = [u8; 3];

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeColors {
    pub accent: RgbColor,
    pub accent_dim: RgbColor,
    pub success: RgbColor,
    pub warning: RgbColor,
    pub error: RgbColor,
    pub text: RgbColor,
    pub text_secondary: RgbColor,
    pub text_muted: RgbColor,
    pub bg_base: RgbColor,
    pub bg_surface: RgbColor,
    pub bg_elevated: RgbColor,
    pub border: RgbColor,
}

/// Default theme ID
pub const DEFAULT_THEME: &str = "dark";

/// Available theme IDs in display order
pub const THEME_ORDER: &[&str] = &["dark", "light", "high_contrast"];

// ============================================================================
// Loading
// ============================================================================

fn parse_yaml<T: for<'de> Deserialize<'de>>(name: &str, content: &str) -> T {
    serde_yaml::from_str(content).unwrap_or_else(|e| panic!("Failed to parse {}: {}", name, e))
}

pub static THEMES: LazyLock<ThemesConfig> =
    LazyLock::new(|| parse_yaml("themes.yaml", include_str!("../../yamls/themes.yaml")));

/// Whether `theme_id` names a bundled theme.
pub fn is_known_theme(theme_id: &str) -> bool {
    THEMES.themes.contains_key(theme_id)
}

/// Get a theme by ID, falling back to default if not found
pub fn get_theme(theme_id: &str) -> &'static Theme {
    THEMES.themes.get(theme_id).or_else(|| THEMES.themes.get(DEFAULT_THEME)).expect("Default theme must exist")
}

// ============================================================================
// Active Theme (Global State)
// ============================================================================

/// Active theme ID; empty means the default.
static ACTIVE_THEME: RwLock<String> = RwLock::new(String::new());

/// Set the active theme ID (call at startup or when the theme changes)
pub fn set_active_theme(theme_id: &str) {
    if let Ok(mut theme) = ACTIVE_THEME.write() {
        *theme = theme_id.to_string();
    }
}

/// Get the currently active theme
pub fn active_theme() -> &'static Theme {
    let theme_id = ACTIVE_THEME.read().map(|t| t.clone()).unwrap_or_default();
    get_theme(&theme_id)
}

// =============================================================================
// THEME COLORS (loaded from active theme)
// =============================================================================

pub mod theme {
    use super::active_theme;
    use ratatui::style::Color;

    fn rgb(c: [u8; 3]) -> Color {
        Color::Rgb(c[0], c[1], c[2])
    }

    pub fn accent() -> Color {
        rgb(active_theme().colors.accent)
    }
    pub fn accent_dim() -> Color {
        rgb(active_theme().colors.accent_dim)
    }
    pub fn success() -> Color {
        rgb(active_theme().colors.success)
    }
    pub fn warning() -> Color {
        rgb(active_theme().colors.warning)
    }
    pub fn error() -> Color {
        rgb(active_theme().colors.error)
    }
    pub fn text() -> Color {
        rgb(active_theme().colors.text)
    }
    pub fn text_secondary() -> Color {
        rgb(active_theme().colors.text_secondary)
    }
    pub fn text_muted() -> Color {
        rgb(active_theme().colors.text_muted)
    }
    pub fn bg_base() -> Color {
        rgb(active_theme().colors.bg_base)
    }
    pub fn bg_surface() -> Color {
        rgb(active_theme().colors.bg_surface)
    }
    pub fn bg_elevated() -> Color {
        rgb(active_theme().colors.bg_elevated)
    }
    pub fn border() -> Color {
        rgb(active_theme().colors.border)
    }
}

pub mod icons {
    use super::active_theme;

    pub fn pointer() -> &'static str {
        &active_theme().icons.pointer
    }
    pub fn opened() -> &'static str {
        &active_theme().icons.opened
    }
}

pub mod chars {
    pub const HORIZONTAL: &str = "─";
    pub const CURSOR: &str = "│";
}
