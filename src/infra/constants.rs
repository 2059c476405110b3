// =============================================================================
// EVENT LOOP
// =============================================================================

/// How long the event loop waits for input before looping again
pub const EVENT_POLL_MS: u64 = 250;

// =============================================================================
// LOGGING
// =============================================================================

/// Log file name used when `ONBOARD_LOG` is not set (placed in the temp dir)
pub const LOG_FILE_NAME: &str = "onboard.log";

/// Panic reports land next to the log file under this name
pub const PANIC_LOG_FILE_NAME: &str = "onboard-panic.log";

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "onboard=info,ob_forms=info";

// =============================================================================
// LAYOUT
// =============================================================================

/// Width of modal dialogs in cells (clamped to the screen)
pub const DIALOG_WIDTH: u16 = 60;

/// Height reserved for the debug panel on the forms screen
pub const DEBUG_PANEL_HEIGHT: u16 = 12;
