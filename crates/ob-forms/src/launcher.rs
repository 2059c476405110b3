//! Hand a file to the operating system's default application.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::FormError;

/// Opens a file with whatever the desktop associates with it.
pub trait Launcher {
    fn open(&self, path: &Path) -> Result<(), FormError>;
}

/// Platform backends for [`SystemLauncher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Unix,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Unix,
        }
    }

    /// Build the opener command for `path` without running it.
    pub fn command(self, path: &Path) -> Command {
        match self {
            Platform::MacOs => {
                let mut cmd = Command::new("open");
                cmd.arg(path);
                cmd
            }
            Platform::Windows => {
                // The empty string is `start`'s window title; without it a quoted path is taken as the title.
                let mut cmd = Command::new("cmd");
                cmd.args(["/C", "start", ""]).arg(path);
                cmd
            }
            Platform::Unix => {
                let mut cmd = Command::new("xdg-open");
                cmd.arg(path);
                cmd
            }
        }
    }
}

/// Runs the platform opener and waits for it to hand off.
#[derive(Debug, Clone, Copy)]
pub struct SystemLauncher {
    platform: Platform,
}

impl SystemLauncher {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn detect() -> Self {
        Self::new(Platform::current())
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}

impl Launcher for SystemLauncher {
    fn open(&self, path: &Path) -> Result<(), FormError> {
        let launch_failed = |reason: String| FormError::LaunchFailed { path: path.to_path_buf(), reason };

        // Child output would scribble over the terminal UI.
        let status = self
            .platform
            .command(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| launch_failed(e.to_string()))?;

        if !status.success() {
            return Err(launch_failed(format!("opener exited with {}", status)));
        }
        tracing::debug!(path = %path.display(), platform = ?self.platform, "launched default application");
        Ok(())
    }
}

/// Records every path it is asked to open. Can be told to fail.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    opened: std::cell::RefCell<Vec<std::path::PathBuf>>,
    fail_with: std::cell::RefCell<Option<String>>,
}

#[cfg(any(test, feature = "testing"))]
impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<std::path::PathBuf> {
        self.opened.borrow().clone()
    }

    /// Make subsequent opens fail with `reason`; `None` restores success.
    pub fn fail_with(&self, reason: Option<&str>) {
        *self.fail_with.borrow_mut() = reason.map(str::to_string);
    }
}

#[cfg(any(test, feature = "testing"))]
impl Launcher for RecordingLauncher {
    fn open(&self, path: &Path) -> Result<(), FormError> {
        if let Some(reason) = self.fail_with.borrow().clone() {
            return Err(FormError::LaunchFailed { path: path.to_path_buf(), reason });
        }
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

impl<L: Launcher + ?Sized> Launcher for std::rc::Rc<L> {
    fn open(&self, path: &Path) -> Result<(), FormError> {
        (**self).open(path)
    }
}
