//! Kiosk configuration: per-role template directories and display name.
//!
//! Resolution is plain value substitution over a [`RawConfig`]; reading the
//! environment is the binary's job.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::role::Role;

pub const DEFAULT_DAYCARE_NAME: &str = "Daycare";

/// Unvalidated settings as read from the environment or a `.env` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub daycare_name: Option<String>,
    pub parent_forms_dir: Option<String>,
    pub staff_forms_dir: Option<String>,
}

/// Where a resolved role directory came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirSource {
    /// Configured value pointed at an existing directory
    Configured,
    /// Nothing configured; using the application directory
    Default,
    /// Configured value was not a directory; using the application directory
    Invalid(String),
}

impl DirSource {
    pub fn label(&self) -> &'static str {
        match self {
            DirSource::Configured => "configured",
            DirSource::Default => "default",
            DirSource::Invalid(_) => "invalid, using default",
        }
    }
}

/// A role directory together with how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDir {
    pub path: PathBuf,
    pub source: DirSource,
}

impl fmt::Display for RoleDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.source.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    pub daycare_name: String,
    /// Fallback for unset or invalid role directories
    pub app_dir: PathBuf,
    pub parent: RoleDir,
    pub staff: RoleDir,
}

impl KioskConfig {
    /// Validate `raw`, substituting `app_dir` for missing or invalid directories.
    pub fn resolve(raw: RawConfig, app_dir: &Path) -> Self {
        let daycare_name = raw
            .daycare_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| DEFAULT_DAYCARE_NAME.to_string());

        Self {
            daycare_name,
            app_dir: app_dir.to_path_buf(),
            parent: resolve_dir("PARENT_FORMS_DIR", raw.parent_forms_dir, app_dir),
            staff: resolve_dir("STAFF_FORMS_DIR", raw.staff_forms_dir, app_dir),
        }
    }

    /// Every role served from a single directory.
    pub fn single_dir(daycare_name: &str, dir: &Path) -> Self {
        let role_dir = || RoleDir { path: dir.to_path_buf(), source: DirSource::Configured };
        Self { daycare_name: daycare_name.to_string(), app_dir: dir.to_path_buf(), parent: role_dir(), staff: role_dir() }
    }

    pub fn app_name(&self) -> String {
        format!("{} Onboarding Forms", self.daycare_name)
    }

    pub fn role_dir(&self, role: Role) -> &RoleDir {
        match role {
            Role::Parent => &self.parent,
            Role::Staff => &self.staff,
        }
    }
}

fn resolve_dir(key: &str, configured: Option<String>, app_dir: &Path) -> RoleDir {
    match configured.filter(|v| !v.trim().is_empty()) {
        Some(value) if Path::new(&value).is_dir() => {
            tracing::info!("Using {} from environment: {}", key, value);
            RoleDir { path: PathBuf::from(value), source: DirSource::Configured }
        }
        Some(value) => {
            tracing::warn!("{} '{}' is invalid. Defaulting to application directory: {}", key, value, app_dir.display());
            RoleDir { path: app_dir.to_path_buf(), source: DirSource::Invalid(value) }
        }
        None => {
            tracing::info!("{} not set. Defaulting to application directory: {}", key, app_dir.display());
            RoleDir { path: app_dir.to_path_buf(), source: DirSource::Default }
        }
    }
}
