mod app;
mod infra;
mod state;
mod ui;

use std::io;

use crossterm::{
    ExecutableCommand,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ob_forms::{FormTracker, KioskConfig, SystemClock, SystemLauncher};
use ratatui::prelude::*;

use app::App;
use infra::config::set_active_theme;
use state::State;

fn main() -> io::Result<()> {
    let env = infra::env::load();

    if let Err(e) = infra::logging::init(&env.log_path) {
        eprintln!("onboard: logging disabled ({}): {}", env.log_path.display(), e);
    }
    match &env.dotenv {
        Some(path) => tracing::info!("loaded environment from {}", path.display()),
        None => tracing::info!("no .env file found; using process environment"),
    }

    // Panic hook: restore terminal state and log the panic to disk.
    // Without this, a panic leaves the terminal in raw mode + alternate screen.
    let log_path = env.log_path.clone();
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(DisableBracketedPaste);
        let _ = io::stdout().execute(LeaveAlternateScreen);

        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!("panic: {}", info);
        infra::logging::write_panic_report(&log_path, &format!("[{}] {}\n\n{}\n\n---\n", ts, info, backtrace));

        default_hook(info);
    }));

    let config = KioskConfig::resolve(env.raw, &infra::env::app_dir());
    tracing::info!(
        daycare = %config.daycare_name,
        parent = %config.parent,
        staff = %config.staff,
        "kiosk configured"
    );

    set_active_theme(&env.theme);
    let tracker = FormTracker::new(config, Box::new(SystemLauncher::detect()), Box::new(SystemClock));
    let state = State::new(tracker, &env.theme);

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(state);
    let result = app.run(&mut terminal);

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(DisableBracketedPaste)?;
    io::stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        tracing::error!("terminal error: {}", e);
    }
    tracing::info!("kiosk closed");
    result
}
