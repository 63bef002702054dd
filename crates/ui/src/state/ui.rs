use crate::theme::ThemeVariant;

/// One-line message shown in the footer until the next action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

/// Presentation state that the browser itself does not track
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub theme_variant: ThemeVariant,
    /// First visible line of the entry panel
    pub entry_scroll: u16,
    /// First visible row of the response summary
    pub summary_scroll: u16,
    pub status: Option<StatusMessage>,
    /// Set after the terminal was handed to another program
    pub needs_clear: bool,
}

impl UiState {
    pub fn scroll_entry(&mut self, delta: i32) {
        self.entry_scroll = apply_delta(self.entry_scroll, delta);
    }

    pub fn scroll_summary(&mut self, delta: i32) {
        self.summary_scroll = apply_delta(self.summary_scroll, delta);
    }

    pub fn toggle_theme(&mut self) {
        self.theme_variant = self.theme_variant.toggle();
    }
}

fn apply_delta(value: u16, delta: i32) -> u16 {
    (i32::from(value) + delta).clamp(0, i32::from(u16::MAX)) as u16
}
