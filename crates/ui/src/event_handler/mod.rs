mod key_action;
mod keybindings;

pub use key_action::KeyAction;
pub use keybindings::{Binding, BindingScope, Keybindings};

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use valueview_core::Section;

/// Event handler for the TUI application
pub struct EventHandler;

impl EventHandler {
    /// Read a single event from the terminal
    ///
    /// Returns `Some(event)` if an event is available, `None` on timeout or error.
    /// Terminal errors are logged but not propagated.
    pub fn read() -> Option<Event> {
        match crossterm::event::poll(std::time::Duration::from_millis(100)) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!(error = %e, "terminal read error");
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                tracing::warn!(error = %e, "event poll error");
                None
            }
        }
    }

    /// Resolve a key press against the bindings of the visible section
    pub fn handle_key_event(event: KeyEvent, keybindings: &Keybindings, section: Section) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }
        keybindings.resolve(section, &event)
    }

    /// Handle any event; only key presses produce actions
    pub fn handle_event(event: &Event, keybindings: &Keybindings, section: Section) -> Option<KeyAction> {
        match event {
            Event::Key(key_event) => Self::handle_key_event(*key_event, keybindings, section),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_handle_event_key_press() {
        let keys = Keybindings::default();
        let event = Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(
            EventHandler::handle_event(&event, &keys, Section::EntryBrowser),
            Some(KeyAction::NextEntry)
        );
    }

    #[test]
    fn test_key_release_is_ignored() {
        let keys = Keybindings::default();
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(EventHandler::handle_key_event(release, &keys, Section::EntryBrowser), None);
    }

    #[test]
    fn test_non_key_events_produce_nothing() {
        let keys = Keybindings::default();
        assert_eq!(EventHandler::handle_event(&Event::Resize(80, 24), &keys, Section::EntryBrowser), None);
        assert_eq!(EventHandler::handle_event(&Event::FocusGained, &keys, Section::MainNavigator), None);
    }
}
