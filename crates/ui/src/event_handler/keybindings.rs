use super::KeyAction;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use valueview_core::Section;

/// Where a binding applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingScope {
    Global,
    Section(Section),
}

/// One key mapped to one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub scope: BindingScope,
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    /// Footer label; bindings without one are aliases and stay unlisted
    pub hint: Option<&'static str>,
}

impl Binding {
    /// Shift is ignored so `BackTab` and upper-case letters resolve
    fn matches(&self, event: &KeyEvent) -> bool {
        self.code == event.code
            && self.modifiers.difference(KeyModifiers::SHIFT) == event.modifiers.difference(KeyModifiers::SHIFT)
    }

    fn applies_to(&self, section: Section) -> bool {
        match self.scope {
            BindingScope::Global => true,
            BindingScope::Section(scope) => scope == section,
        }
    }
}

/// Key table, built once and consulted for every key press
///
/// Section-scoped bindings win over global ones.
#[derive(Debug, Clone)]
pub struct Keybindings {
    bindings: Vec<Binding>,
}

impl Default for Keybindings {
    fn default() -> Self {
        use BindingScope::{Global, Section as In};
        use KeyCode::*;

        let browser = In(Section::EntryBrowser);
        let navigator = In(Section::MainNavigator);
        let summary = In(Section::ResponseSummary);

        let mut table = Keybindings { bindings: Vec::new() };
        table
            .bind(browser, Left, KeyAction::PreviousEntry, Some("←"))
            .bind(browser, Char('h'), KeyAction::PreviousEntry, None)
            .bind(browser, Right, KeyAction::NextEntry, Some("→"))
            .bind(browser, Char('l'), KeyAction::NextEntry, None)
            .bind(browser, PageUp, KeyAction::PageUp, Some("PgUp"))
            .bind(browser, PageDown, KeyAction::PageDown, Some("PgDn"))
            .bind(browser, Home, KeyAction::FirstEntry, Some("Home"))
            .bind(browser, End, KeyAction::LastEntry, Some("End"))
            .bind(browser, Up, KeyAction::ScrollUp, None)
            .bind(browser, Char('k'), KeyAction::ScrollUp, None)
            .bind(browser, Down, KeyAction::ScrollDown, None)
            .bind(browser, Char('j'), KeyAction::ScrollDown, None)
            .bind(browser, Char('o'), KeyAction::OpenTerminalOutput, Some("o"))
            .bind(navigator, Up, KeyAction::NavigatorUp, Some("↑"))
            .bind(navigator, Char('k'), KeyAction::NavigatorUp, None)
            .bind(navigator, Down, KeyAction::NavigatorDown, Some("↓"))
            .bind(navigator, Char('j'), KeyAction::NavigatorDown, None)
            .bind(navigator, Enter, KeyAction::OpenSelected, Some("Enter"))
            .bind(summary, Up, KeyAction::ScrollUp, Some("↑"))
            .bind(summary, Char('k'), KeyAction::ScrollUp, None)
            .bind(summary, Down, KeyAction::ScrollDown, Some("↓"))
            .bind(summary, Char('j'), KeyAction::ScrollDown, None)
            .bind(Global, Tab, KeyAction::NextDataset, Some("Tab"))
            .bind(Global, BackTab, KeyAction::PreviousDataset, None)
            .bind(Global, Char('m'), KeyAction::ShowSection(Section::MainNavigator), Some("m"))
            .bind(Global, Esc, KeyAction::ShowSection(Section::MainNavigator), None)
            .bind(Global, Char('b'), KeyAction::ShowSection(Section::EntryBrowser), Some("b"))
            .bind(Global, Char('s'), KeyAction::ShowSection(Section::ResponseSummary), Some("s"))
            .bind(Global, Char('t'), KeyAction::ToggleTheme, Some("t"))
            .bind(Global, Char('q'), KeyAction::Exit, Some("q"));
        table.bindings.push(Binding {
            scope: Global,
            code: Char('c'),
            modifiers: KeyModifiers::CONTROL,
            action: KeyAction::Exit,
            hint: None,
        });
        table
    }
}

impl Keybindings {
    fn bind(
        &mut self, scope: BindingScope, code: KeyCode, action: KeyAction, hint: Option<&'static str>,
    ) -> &mut Self {
        self.bindings.push(Binding { scope, code, modifiers: KeyModifiers::NONE, action, hint });
        self
    }

    /// Action for a key press in `section`
    pub fn resolve(&self, section: Section, event: &KeyEvent) -> Option<KeyAction> {
        let scoped = self
            .bindings
            .iter()
            .filter(|binding| binding.scope != BindingScope::Global)
            .find(|binding| binding.applies_to(section) && binding.matches(event));

        scoped
            .or_else(|| {
                self.bindings
                    .iter()
                    .filter(|binding| binding.scope == BindingScope::Global)
                    .find(|binding| binding.matches(event))
            })
            .map(|binding| binding.action)
    }

    /// `(key, description)` pairs shown in the footer for `section`
    ///
    /// Section bindings come first, then global ones.
    pub fn hints(&self, section: Section) -> Vec<(&'static str, &'static str)> {
        let scoped = self.bindings.iter().filter(|b| b.scope == BindingScope::Section(section));
        let global = self.bindings.iter().filter(|b| b.scope == BindingScope::Global);

        scoped
            .chain(global)
            .filter_map(|binding| binding.hint.map(|key| (key, binding.action.description())))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_entry_navigation_keys() {
        let keys = Keybindings::default();
        let section = Section::EntryBrowser;
        assert_eq!(keys.resolve(section, &key(KeyCode::Left)), Some(KeyAction::PreviousEntry));
        assert_eq!(keys.resolve(section, &key(KeyCode::Char('h'))), Some(KeyAction::PreviousEntry));
        assert_eq!(keys.resolve(section, &key(KeyCode::Right)), Some(KeyAction::NextEntry));
        assert_eq!(keys.resolve(section, &key(KeyCode::Char('l'))), Some(KeyAction::NextEntry));
        assert_eq!(keys.resolve(section, &key(KeyCode::PageDown)), Some(KeyAction::PageDown));
        assert_eq!(keys.resolve(section, &key(KeyCode::Home)), Some(KeyAction::FirstEntry));
        assert_eq!(keys.resolve(section, &key(KeyCode::End)), Some(KeyAction::LastEntry));
        assert_eq!(keys.resolve(section, &key(KeyCode::Char('o'))), Some(KeyAction::OpenTerminalOutput));
    }

    #[test]
    fn test_keys_are_scoped_per_section() {
        let keys = Keybindings::default();
        assert_eq!(keys.resolve(Section::MainNavigator, &key(KeyCode::Left)), None);
        assert_eq!(keys.resolve(Section::ResponseSummary, &key(KeyCode::Char('o'))), None);
        assert_eq!(keys.resolve(Section::MainNavigator, &key(KeyCode::Up)), Some(KeyAction::NavigatorUp));
        assert_eq!(keys.resolve(Section::EntryBrowser, &key(KeyCode::Up)), Some(KeyAction::ScrollUp));
        assert_eq!(keys.resolve(Section::MainNavigator, &key(KeyCode::Enter)), Some(KeyAction::OpenSelected));
        assert_eq!(keys.resolve(Section::EntryBrowser, &key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_global_keys_everywhere() {
        let keys = Keybindings::default();
        for section in Section::VALUES {
            assert_eq!(keys.resolve(*section, &key(KeyCode::Tab)), Some(KeyAction::NextDataset));
            assert_eq!(
                keys.resolve(*section, &key(KeyCode::Esc)),
                Some(KeyAction::ShowSection(Section::MainNavigator))
            );
            assert_eq!(
                keys.resolve(*section, &key(KeyCode::Char('s'))),
                Some(KeyAction::ShowSection(Section::ResponseSummary))
            );
            assert_eq!(keys.resolve(*section, &key(KeyCode::Char('q'))), Some(KeyAction::Exit));
        }
    }

    #[test]
    fn test_shift_and_control_modifiers() {
        let keys = Keybindings::default();
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(keys.resolve(Section::EntryBrowser, &back_tab), Some(KeyAction::PreviousDataset));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keys.resolve(Section::MainNavigator, &ctrl_c), Some(KeyAction::Exit));
        assert_eq!(keys.resolve(Section::MainNavigator, &key(KeyCode::Char('c'))), None);

        let ctrl_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert_eq!(keys.resolve(Section::MainNavigator, &ctrl_q), None);
    }

    #[test]
    fn test_hints_skip_aliases() {
        let keys = Keybindings::default();
        let hints = keys.hints(Section::EntryBrowser);
        assert_eq!(hints[0], ("←", "prev"));
        assert_eq!(hints[1], ("→", "next"));
        assert!(hints.contains(&("o", "terminal output")));
        assert!(hints.contains(&("q", "quit")));
        assert!(!hints.iter().any(|(key, _)| *key == "h"));

        let navigator = keys.hints(Section::MainNavigator);
        assert_eq!(navigator[0], ("↑", "up"));
        assert!(!navigator.contains(&("o", "terminal output")));
    }
}
