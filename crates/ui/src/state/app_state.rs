use super::{StatusMessage, UiState};
use crate::theme::ThemeVariant;

use valueview_core::{BrowserView, EntryBrowser, ResponseCounts, Section};

/// Main application state
///
/// Owns the [`EntryBrowser`] and the last [`BrowserView`] it produced. Every
/// browser operation goes through here so the cached view never goes stale.
#[derive(Debug, Clone)]
pub struct AppState {
    browser: EntryBrowser,
    view: BrowserView,
    /// Response distribution of the loaded dataset
    summary: ResponseCounts,
    /// Entries skipped by page up/down
    pub page_step: i64,
    pub ui: UiState,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(browser: EntryBrowser) -> Self {
        let view = browser.render();
        let summary = browser.response_counts();
        Self { browser, view, summary, page_step: 10, ui: UiState::default(), should_exit: false }
    }

    pub fn with_theme(mut self, variant: ThemeVariant) -> Self {
        self.ui.theme_variant = variant;
        self
    }

    pub fn with_page_step(mut self, page_step: u32) -> Self {
        self.page_step = i64::from(page_step.max(1));
        self
    }

    pub fn browser(&self) -> &EntryBrowser {
        &self.browser
    }

    pub fn view(&self) -> &BrowserView {
        &self.view
    }

    pub fn summary(&self) -> &ResponseCounts {
        &self.summary
    }

    pub fn active_section(&self) -> Section {
        self.view.active_section()
    }

    pub fn theme_variant(&self) -> ThemeVariant {
        self.ui.theme_variant
    }

    /// Move by `step` entries; the entry panel scrolls back to the top on change
    pub fn navigate(&mut self, step: i64) {
        let before = self.browser.current_index();
        self.view = self.browser.navigate(step);
        if self.browser.current_index() != before {
            self.ui.entry_scroll = 0;
        }
    }

    pub fn page_up(&mut self) {
        self.navigate(-self.page_step);
    }

    pub fn page_down(&mut self) {
        self.navigate(self.page_step);
    }

    pub fn first_entry(&mut self) {
        self.navigate(i64::MIN);
    }

    pub fn last_entry(&mut self) {
        self.navigate(i64::MAX);
    }

    /// Move the selector to the next dataset and load it
    pub fn next_dataset(&mut self) {
        self.browser.choose_next();
        self.load_selected_dataset();
    }

    pub fn prev_dataset(&mut self) {
        self.browser.choose_prev();
        self.load_selected_dataset();
    }

    /// Move the selector highlight without loading
    pub fn navigator_up(&mut self) {
        self.browser.choose_prev();
        self.view = self.browser.render();
    }

    pub fn navigator_down(&mut self) {
        self.browser.choose_next();
        self.view = self.browser.render();
    }

    /// Load the highlighted dataset and show its entries
    pub fn open_selected(&mut self) {
        self.load_selected_dataset();
        self.switch_section(Section::EntryBrowser);
    }

    pub fn switch_section(&mut self, section: Section) {
        self.view = self.browser.switch_section(section);
    }

    /// Scroll whichever section is visible
    pub fn scroll(&mut self, delta: i32) {
        match self.active_section() {
            Section::EntryBrowser => self.ui.scroll_entry(delta),
            Section::ResponseSummary => self.ui.scroll_summary(delta),
            Section::MainNavigator => {}
        }
    }

    pub fn toggle_theme(&mut self) {
        self.ui.toggle_theme();
        self.set_status(StatusMessage::info(format!("Theme switched to {}", self.ui.theme_variant)));
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.ui.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.ui.status = None;
    }

    fn load_selected_dataset(&mut self) {
        self.view = self.browser.select_dataset();
        self.summary = self.browser.response_counts();
        self.ui.entry_scroll = 0;
        self.ui.summary_scroll = 0;
    }
}

#[cfg(test)]
pub(crate) fn sample_browser() -> EntryBrowser {
    use valueview_core::{DatasetSource, Entry};

    let entries = |n: usize, parsed: &str| -> Vec<Entry> {
        (0..n)
            .map(|i| {
                Entry::new(format!("Prompt {}\nSecond line", i + 1), format!("Response {}", i + 1))
                    .with_question((i % 2 + 1) as u64)
                    .with_persona(i as u64)
                    .with_parsed(parsed.to_string())
            })
            .collect()
    };

    let source: DatasetSource = vec![
        ("run_50_1_gpt-3.5-turbo-1106", entries(4, "A")),
        ("run_50_1_gpt-4", entries(2, "B")),
        ("run_empty", vec![]),
    ]
    .into_iter()
    .collect();
    EntryBrowser::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use valueview_core::Phase;

    #[test]
    fn test_new_caches_initial_view() {
        let state = AppState::new(sample_browser());
        assert_eq!(state.view(), &state.browser().render());
        assert_eq!(state.active_section(), Section::MainNavigator);
        assert_eq!(state.summary().total(), 4);
    }

    #[test]
    fn test_page_step_is_at_least_one() {
        let state = AppState::new(sample_browser()).with_page_step(0);
        assert_eq!(state.page_step, 1);
    }

    #[test]
    fn test_navigation_clamps_and_resets_scroll() {
        let mut state = AppState::new(sample_browser()).with_page_step(3);
        state.switch_section(Section::EntryBrowser);
        state.scroll(5);
        assert_eq!(state.ui.entry_scroll, 5);

        state.page_down();
        assert_eq!(state.browser().current_index(), 3);
        assert_eq!(state.ui.entry_scroll, 0);

        state.scroll(2);
        state.navigate(1);
        assert_eq!(state.browser().current_index(), 3);
        assert_eq!(state.ui.entry_scroll, 2);

        state.first_entry();
        assert_eq!(state.browser().current_index(), 0);
        state.last_entry();
        assert_eq!(state.view().progress.text, "Entry 4 of 4");
    }

    #[test]
    fn test_next_dataset_loads_and_wraps() {
        let mut state = AppState::new(sample_browser());
        state.next_dataset();
        assert_eq!(state.browser().selected_key(), Some("run_50_1_gpt-4"));
        assert_eq!(state.summary().count("1", "B"), 1);

        state.next_dataset();
        assert_eq!(state.browser().phase(), Phase::Empty);
        assert!(state.view().entry.is_placeholder());

        state.next_dataset();
        assert_eq!(state.browser().selected_key(), Some("run_50_1_gpt-3.5-turbo-1106"));

        state.prev_dataset();
        assert_eq!(state.browser().selected_key(), Some("run_empty"));
    }

    #[test]
    fn test_navigator_moves_without_loading() {
        let mut state = AppState::new(sample_browser());
        state.navigator_down();
        assert_eq!(state.view().selector.selected, Some(1));
        assert_eq!(state.browser().selected_key(), Some("run_50_1_gpt-3.5-turbo-1106"));

        state.open_selected();
        assert_eq!(state.browser().selected_key(), Some("run_50_1_gpt-4"));
        assert_eq!(state.active_section(), Section::EntryBrowser);
    }

    #[test]
    fn test_switching_section_resyncs_navigator_choice() {
        let mut state = AppState::new(sample_browser());
        state.navigator_down();
        state.switch_section(Section::ResponseSummary);
        assert_eq!(state.view().selector.selected, Some(0));
        assert_eq!(state.browser().selector().value(), state.browser().selected_key());
    }

    #[test]
    fn test_scroll_targets_visible_section() {
        let mut state = AppState::new(sample_browser());
        state.scroll(3);
        assert_eq!(state.ui.entry_scroll, 0);
        assert_eq!(state.ui.summary_scroll, 0);

        state.switch_section(Section::ResponseSummary);
        state.scroll(3);
        assert_eq!(state.ui.summary_scroll, 3);
    }

    #[test]
    fn test_toggle_theme_sets_status() {
        let mut state = AppState::new(sample_browser());
        state.toggle_theme();
        assert_eq!(state.theme_variant(), ThemeVariant::Light);
        assert_eq!(state.ui.status, Some(StatusMessage::info("Theme switched to light")));
        state.clear_status();
        assert!(state.ui.status.is_none());
    }
}
