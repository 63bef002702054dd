use crate::theme::ThemePalette;

use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
};
use valueview_core::{NavAction, NavigationView, Section};

/// Previous/next/back/link controls plus the link address
///
/// Draws nothing while the entry panel shows the placeholder.
pub struct NavigationBar<'a> {
    navigation: Option<&'a NavigationView>,
    theme: ThemePalette,
}

impl<'a> NavigationBar<'a> {
    pub fn new(navigation: Option<&'a NavigationView>, theme: ThemePalette) -> Self {
        Self { navigation, theme }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let Some(navigation) = self.navigation else {
            return;
        };

        let mut controls = Vec::new();
        for (idx, action) in navigation.actions.iter().enumerate() {
            if idx > 0 {
                controls.push(Span::styled("  ", self.theme.base()));
            }
            controls.push(Span::styled(format!("[{}] ", key_for(action)), self.theme.key_hint()));
            controls.push(Span::styled(action.label(), self.theme.base()));
        }

        let mut lines = vec![Line::from(controls)];
        if let Some(url) = navigation.terminal_output_url() {
            lines.push(Line::from(Span::styled(
                url.to_string(),
                self.theme.muted().add_modifier(Modifier::UNDERLINED),
            )));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Key that triggers a navigation action
pub fn key_for(action: &NavAction) -> &'static str {
    match action {
        NavAction::Previous => "←",
        NavAction::Next => "→",
        NavAction::Section(Section::MainNavigator) => "m",
        NavAction::Section(Section::EntryBrowser) => "b",
        NavAction::Section(Section::ResponseSummary) => "s",
        NavAction::Open { .. } => "o",
    }
}
