use std::io;
use std::time::Duration;

use crossterm::event;
use ratatui::prelude::*;

use crate::app::actions::{Action, ActionResult, apply_action};
use crate::app::events::handle_event;
use crate::infra::constants::EVENT_POLL_MS;
use crate::state::State;
use crate::ui;

pub struct App {
    pub state: State,
}

impl App {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            if self.state.dirty {
                terminal.draw(|frame| ui::render(frame, &self.state))?;
                self.state.dirty = false;
            }

            if !event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                continue;
            }

            let evt = event::read()?;
            if matches!(evt, event::Event::Resize(..)) {
                self.state.dirty = true;
                continue;
            }

            let Some(action) = handle_event(&evt, &self.state) else {
                tracing::info!("quit requested");
                break;
            };
            if action == Action::None {
                continue;
            }

            self.state.dirty = true;
            if apply_action(&mut self.state, action) == ActionResult::Quit {
                break;
            }
        }
        Ok(())
    }
}
