use std::fs;
use std::rc::Rc;

use chrono::NaiveDate;
use ob_forms::{FixedClock, FormTracker, KioskConfig, RecordingLauncher};
use tempfile::TempDir;

use super::State;

/// A kiosk state wired to a temp template directory and fake side effects.
pub struct TestKiosk {
    pub state: State,
    pub launcher: Rc<RecordingLauncher>,
    pub clock: Rc<FixedClock>,
    pub dir: TempDir,
}

/// Both roles share one temp directory seeded with `files`.
pub fn kiosk(files: &[&str]) -> TestKiosk {
    let dir = TempDir::new().unwrap();
    for name in files {
        fs::write(dir.path().join(name), b"template").unwrap();
    }
    let launcher = Rc::new(RecordingLauncher::new());
    let noon = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
    let clock = Rc::new(FixedClock::new(noon));
    let config = KioskConfig::single_dir("Test", dir.path());
    let tracker = FormTracker::new(config, Box::new(launcher.clone()), Box::new(clock.clone()));
    TestKiosk { state: State::new(tracker, "dark"), launcher, clock, dir }
}
