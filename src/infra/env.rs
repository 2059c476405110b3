//! Environment loading: `.env` discovery plus process variables.

use std::path::PathBuf;

use ob_forms::RawConfig;

use super::config::{DEFAULT_THEME, is_known_theme};
use super::constants::LOG_FILE_NAME;

/// Everything the binary reads from the environment before starting the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub raw: RawConfig,
    pub theme: String,
    pub log_path: PathBuf,
    /// `.env` file that was loaded, if any
    pub dotenv: Option<PathBuf>,
}

/// Load `.env` (searching upward from the working directory), then read variables.
pub fn load() -> Environment {
    let dotenv = dotenvy::dotenv().ok();
    Environment { dotenv, ..from_lookup(|key| std::env::var(key).ok()) }
}

/// Build an [`Environment`] from any key lookup.
pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Environment {
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let raw = RawConfig {
        daycare_name: non_empty("DAYCARE_NAME"),
        parent_forms_dir: non_empty("PARENT_FORMS_DIR"),
        staff_forms_dir: non_empty("STAFF_FORMS_DIR"),
    };

    let theme = non_empty("ONBOARD_THEME")
        .map(|t| t.trim().to_ascii_lowercase())
        .filter(|t| is_known_theme(t))
        .unwrap_or_else(|| DEFAULT_THEME.to_string());

    let log_path = non_empty("ONBOARD_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME));

    Environment { raw, theme, log_path, dotenv: None }
}

/// Directory the kiosk falls back to for templates: where the executable lives.
pub fn app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
