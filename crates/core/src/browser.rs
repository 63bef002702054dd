use crate::dataset::{Dataset, DatasetSource};
use crate::entry::display_value;
use crate::error::BrowserError;
use crate::links::TerminalOutputLink;
use crate::questions::QuestionStatements;
use crate::section::{Section, SectionVisibility};
use crate::selector::DatasetSelector;
use crate::stats::ResponseCounts;
use crate::view::{BrowserView, EntryDisplay, EntryView, NavAction, NavigationView, ProgressView, SelectorView};

/// Lifecycle phase of the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No dataset has been selected yet
    NoDataset,
    /// A non-empty dataset is loaded
    Loaded,
    /// The selected dataset has no entries
    Empty,
}

/// Selection and position of the browser
///
/// `current_index` is signed: navigating an empty dataset clamps it to -1,
/// which the render guard treats as "no entry".
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    pub selected_key: Option<String>,
    pub current_dataset: Dataset,
    pub current_index: i64,
}

impl ViewerState {
    /// Index of the current entry when it is in bounds
    pub fn position(&self) -> Option<usize> {
        usize::try_from(self.current_index).ok().filter(|idx| *idx < self.current_dataset.len())
    }
}

/// Pages through the datasets of a [`DatasetSource`] one entry at a time
///
/// Every operation completes synchronously and returns the freshly rendered
/// [`BrowserView`]; [`EntryBrowser::render`] itself never mutates state.
#[derive(Debug, Clone)]
pub struct EntryBrowser {
    source: DatasetSource,
    statements: QuestionStatements,
    selector: DatasetSelector,
    state: ViewerState,
    sections: SectionVisibility,
}

impl EntryBrowser {
    /// Populate the selector from the source keys and load the selector's default
    pub fn new(source: DatasetSource) -> Self {
        let mut browser = Self::unloaded(source);
        browser.select_dataset();
        browser
    }

    /// Like [`EntryBrowser::new`], but the initial load uses `key` instead of the first key
    pub fn with_default(source: DatasetSource, key: &str) -> Result<Self, BrowserError> {
        let mut browser = Self::unloaded(source);
        browser.choose(key)?;
        browser.select_dataset();
        Ok(browser)
    }

    fn unloaded(source: DatasetSource) -> Self {
        let selector = DatasetSelector::new(source.keys());
        Self {
            source,
            statements: QuestionStatements::default(),
            selector,
            state: ViewerState::default(),
            sections: SectionVisibility::default(),
        }
    }

    /// Attach question statements shown alongside each entry
    pub fn with_statements(mut self, statements: QuestionStatements) -> Self {
        self.statements = statements;
        self
    }

    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn statements(&self) -> &QuestionStatements {
        &self.statements
    }

    pub fn selector(&self) -> &DatasetSelector {
        &self.selector
    }

    pub fn sections(&self) -> &SectionVisibility {
        &self.sections
    }

    pub fn active_section(&self) -> Section {
        self.sections.active()
    }

    pub fn selected_key(&self) -> Option<&str> {
        self.state.selected_key.as_deref()
    }

    pub fn current_index(&self) -> i64 {
        self.state.current_index
    }

    pub fn phase(&self) -> Phase {
        match (&self.state.selected_key, self.state.current_dataset.is_empty()) {
            (None, _) => Phase::NoDataset,
            (Some(_), true) => Phase::Empty,
            (Some(_), false) => Phase::Loaded,
        }
    }

    /// Choose a selector option without loading it
    pub fn choose(&mut self, key: &str) -> Result<(), BrowserError> {
        if self.selector.choose(key) { Ok(()) } else { Err(BrowserError::UnknownDataset(key.to_string())) }
    }

    pub fn choose_next(&mut self) {
        self.selector.choose_next();
    }

    pub fn choose_prev(&mut self) {
        self.selector.choose_prev();
    }

    /// Load the dataset named by the selector's current value
    ///
    /// Resets the position to the first entry. The selector only ever offers
    /// source keys; with no value (empty source) nothing is loaded.
    pub fn select_dataset(&mut self) -> BrowserView {
        if let Some(key) = self.selector.value() {
            let dataset = self.source.get(key).cloned().unwrap_or_default();
            tracing::debug!(dataset = key, entries = dataset.len(), "selected dataset");
            self.state.selected_key = Some(key.to_string());
            self.state.current_dataset = dataset;
            self.state.current_index = 0;
        }
        self.render()
    }

    /// Choose `key` in the selector and load it
    pub fn load_dataset(&mut self, key: &str) -> Result<BrowserView, BrowserError> {
        self.choose(key)?;
        Ok(self.select_dataset())
    }

    /// Move by `step` entries, clamping at both ends of the dataset
    pub fn navigate(&mut self, step: i64) -> BrowserView {
        let len = self.state.current_dataset.len() as i64;
        let mut index = self.state.current_index.saturating_add(step);
        if index < 0 {
            index = 0;
        }
        if index >= len {
            index = len - 1;
        }
        tracing::trace!(from = self.state.current_index, to = index, step, "navigate");
        self.state.current_index = index;
        self.render()
    }

    /// Make `section` the only visible section
    ///
    /// Leaving the navigator drops any choice that was never loaded, so the
    /// selector names the dataset on screen again.
    pub fn switch_section(&mut self, section: Section) -> BrowserView {
        tracing::debug!(section = section.id(), "switch section");
        if section != Section::MainNavigator
            && let Some(key) = self.state.selected_key.as_deref()
        {
            self.selector.choose(key);
        }
        self.sections.show(section);
        self.render()
    }

    /// [`EntryBrowser::switch_section`] by section id
    pub fn switch_section_id(&mut self, section_id: &str) -> Result<BrowserView, BrowserError> {
        let section = section_id.parse::<Section>()?;
        Ok(self.switch_section(section))
    }

    /// Response distribution of the current dataset
    pub fn response_counts(&self) -> ResponseCounts {
        ResponseCounts::from_dataset(&self.state.current_dataset)
    }

    /// Describe every display region for the current state
    pub fn render(&self) -> BrowserView {
        let selector =
            SelectorView { options: self.selector.options().to_vec(), selected: self.selector.selected_index() };

        let Some(position) = self.state.position() else {
            return BrowserView {
                selector,
                entry: EntryDisplay::Placeholder,
                progress: ProgressView::cleared(),
                navigation: None,
                sections: self.sections.clone(),
            };
        };

        let dataset = &self.state.current_dataset;
        let entry = &dataset.entries()[position];
        let view = EntryView {
            ordinal: position + 1,
            prompt_lines: entry.prompt_lines(),
            question_index: display_value(&entry.question_index),
            persona_index: display_value(&entry.persona_index),
            response_lines: entry.response_lines(),
            response_parsed: display_value(&entry.response_parsed),
            statement: self.statements.statement_for(&entry.question_index).map(str::to_string),
        };

        BrowserView {
            selector,
            entry: EntryDisplay::Entry(view),
            progress: ProgressView::at(position, dataset.len()),
            navigation: Some(self.navigation()),
            sections: self.sections.clone(),
        }
    }

    fn navigation(&self) -> NavigationView {
        let key = self.state.selected_key.as_deref().unwrap_or_default();
        let link = TerminalOutputLink::for_key(key);
        NavigationView {
            actions: vec![
                NavAction::Previous,
                NavAction::Next,
                NavAction::Section(Section::MainNavigator),
                NavAction::Open { url: link.url },
            ],
            relative_link: link.relative,
        }
    }
}
