//! File-backed tracing. Stdout belongs to the terminal UI, so nothing logs there.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use super::constants::{DEFAULT_LOG_FILTER, PANIC_LOG_FILE_NAME};

/// Install the global subscriber appending to `log_path`.
pub fn init(log_path: &Path) -> io::Result<()> {
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(Mutex::new(file)).with_ansi(false).with_target(true))
        .try_init()
        .map_err(io::Error::other)
}

/// Append a panic report next to the log file. Best effort: errors are ignored.
pub fn write_panic_report(log_path: &Path, report: &str) {
    let panic_path = log_path.with_file_name(PANIC_LOG_FILE_NAME);
    let _ = OpenOptions::new().create(true).append(true).open(&panic_path).and_then(|mut f| {
        use std::io::Write;
        f.write_all(report.as_bytes())
    });
}
