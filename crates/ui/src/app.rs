mod event_loop;
mod external;
mod keybinds;
mod rendering;

pub use external::opener_command;
pub use rendering::render_frame;

use crate::event_handler::{KeyAction, Keybindings};
use crate::state::AppState;

use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Result;

/// Main TUI application
///
/// Owns the state and the key table; the event loop feeds it one event at a
/// time.
pub struct App {
    pub(crate) state: AppState,
    keybindings: Keybindings,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self { state, keybindings: Keybindings::default() }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn keybindings(&self) -> &Keybindings {
        &self.keybindings
    }

    pub fn should_exit(&self) -> bool {
        self.state.should_exit
    }

    /// Run the TUI until the user quits
    pub fn run(&mut self) -> Result<()> {
        event_loop::run(self)
    }

    /// Handle one terminal event to completion
    pub fn handle_event(&mut self, event: crossterm::event::Event) {
        keybinds::handle_event(self, event)
    }

    /// Apply a decoded action
    pub fn apply_action(&mut self, action: KeyAction) {
        keybinds::apply_action(self, action)
    }

    /// Open the terminal output page of the loaded dataset
    pub fn open_terminal_output(&mut self) {
        external::open_terminal_output(self)
    }

    pub fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        rendering::draw(self, terminal)
    }
}

#[cfg(test)]
pub(crate) fn create_test_app() -> App {
    App::new(AppState::new(crate::state::sample_browser()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use valueview_core::Section;

    #[test]
    fn test_app_new() {
        let app = create_test_app();
        assert!(!app.should_exit());
        assert_eq!(app.state().active_section(), Section::MainNavigator);
        assert!(app.keybindings().iter().count() > 10);
    }

    #[test]
    fn test_state_mut() {
        let mut app = create_test_app();
        app.state_mut().should_exit = true;
        assert!(app.should_exit());
    }
}
