use crate::infra::config::{THEME_ORDER, set_active_theme};
use crate::state::State;

use super::ActionResult;

/// Handle ToggleDebug action
pub fn handle_toggle_debug(state: &mut State) -> ActionResult {
    state.show_debug = !state.show_debug;
    tracing::debug!(enabled = state.show_debug, "debug panel toggled");
    ActionResult::Nothing
}

/// Handle NextTheme action
pub fn handle_next_theme(state: &mut State) -> ActionResult {
    let current_idx = THEME_ORDER.iter().position(|&t| t == state.active_theme).unwrap_or(0);
    let next_idx = (current_idx + 1) % THEME_ORDER.len();
    apply_theme(state, next_idx)
}

/// Handle PrevTheme action
pub fn handle_prev_theme(state: &mut State) -> ActionResult {
    let current_idx = THEME_ORDER.iter().position(|&t| t == state.active_theme).unwrap_or(0);
    let prev_idx = if current_idx == 0 { THEME_ORDER.len() - 1 } else { current_idx - 1 };
    apply_theme(state, prev_idx)
}

fn apply_theme(state: &mut State, idx: usize) -> ActionResult {
    state.active_theme = THEME_ORDER[idx].to_string();
    set_active_theme(&state.active_theme);
    ActionResult::Nothing
}
