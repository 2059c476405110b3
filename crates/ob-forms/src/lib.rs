//! Session bookkeeping for the front-desk forms kiosk.
//!
//! The [`FormTracker`] is driven by UI events and drives two collaborators:
//! the directory lister in [`template`] and a [`Launcher`] that opens issued
//! copies with the desktop's default application.

pub mod clock;
pub mod config;
pub mod error;
pub mod launcher;
pub mod naming;
pub mod role;
pub mod template;
pub mod tracker;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use config::{DirSource, KioskConfig, RawConfig, RoleDir};
pub use error::{FormError, NameField};
pub use launcher::{Launcher, Platform, SystemLauncher};
#[cfg(any(test, feature = "testing"))]
pub use launcher::RecordingLauncher;
pub use role::Role;
pub use template::Template;
pub use tracker::{FormTracker, OpenKind, OpenOutcome, Snapshot, Stage};
