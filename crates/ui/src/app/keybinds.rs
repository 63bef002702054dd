use super::App;
use crate::event_handler::{EventHandler, KeyAction};

use crossterm::event::Event;

pub fn handle_event(app: &mut App, event: Event) {
    let section = app.state.active_section();
    if let Some(action) = EventHandler::handle_event(&event, &app.keybindings, section) {
        apply_action(app, action);
    }
}

pub fn apply_action(app: &mut App, action: KeyAction) {
    tracing::trace!(?action, "key action");
    app.state.clear_status();

    match action {
        KeyAction::PreviousEntry => app.state.navigate(-1),
        KeyAction::NextEntry => app.state.navigate(1),
        KeyAction::PageUp => app.state.page_up(),
        KeyAction::PageDown => app.state.page_down(),
        KeyAction::FirstEntry => app.state.first_entry(),
        KeyAction::LastEntry => app.state.last_entry(),
        KeyAction::NextDataset => app.state.next_dataset(),
        KeyAction::PreviousDataset => app.state.prev_dataset(),
        KeyAction::NavigatorUp => app.state.navigator_up(),
        KeyAction::NavigatorDown => app.state.navigator_down(),
        KeyAction::OpenSelected => app.state.open_selected(),
        KeyAction::ShowSection(section) => app.state.switch_section(section),
        KeyAction::OpenTerminalOutput => app.open_terminal_output(),
        KeyAction::ScrollUp => app.state.scroll(-1),
        KeyAction::ScrollDown => app.state.scroll(1),
        KeyAction::ToggleTheme => app.state.toggle_theme(),
        KeyAction::Exit => app.state.should_exit = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::create_test_app;
    use crate::theme::ThemeVariant;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use valueview_core::{Phase, Section};

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_navigator_enter_opens_entries() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state().active_section(), Section::EntryBrowser);
        assert_eq!(app.state().browser().selected_key(), Some("run_50_1_gpt-4"));
        assert_eq!(app.state().view().progress.text, "Entry 1 of 2");
    }

    #[test]
    fn test_leaving_navigator_without_enter_keeps_loaded_dataset_highlighted() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('b'));

        let loaded = app.state().browser().selected_key().map(String::from);
        assert_eq!(loaded.as_deref(), Some("run_50_1_gpt-3.5-turbo-1106"));
        assert_eq!(app.state().browser().selector().value(), loaded.as_deref());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().view().selector.selected, Some(0));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().browser().selected_key(), loaded.as_deref());
    }

    #[test]
    fn test_arrow_keys_page_through_entries() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.state().browser().current_index(), 2);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.state().browser().current_index(), 1);

        press(&mut app, KeyCode::End);
        assert_eq!(app.state().view().progress.text, "Entry 4 of 4");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().browser().current_index(), 3);

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.state().browser().current_index(), 0);
    }

    #[test]
    fn test_arrows_ignored_outside_entry_browser() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().browser().current_index(), 0);
        assert_eq!(app.state().active_section(), Section::MainNavigator);
    }

    #[test]
    fn test_tab_cycles_datasets() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().browser().phase(), Phase::Empty);
        assert!(app.state().view().entry.is_placeholder());

        handle_event(&mut app, Event::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)));
        assert_eq!(app.state().browser().selected_key(), Some("run_50_1_gpt-4"));
    }

    #[test]
    fn test_section_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state().active_section(), Section::ResponseSummary);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().active_section(), Section::MainNavigator);
        assert_eq!(app.state().view().sections.visible_count(), 1);
    }

    #[test]
    fn test_theme_and_exit() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.state().theme_variant(), ThemeVariant::Light);
        assert!(app.state().ui.status.is_some());

        press(&mut app, KeyCode::Char('m'));
        assert!(app.state().ui.status.is_none());

        handle_event(&mut app, Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.should_exit());
    }
}
