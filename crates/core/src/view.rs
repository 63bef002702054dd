//! Render descriptions produced by the entry browser.
//!
//! A [`BrowserView`] is everything a surface needs to draw one frame of the
//! browser. It is plain data so it can be compared, snapshotted, or printed.

use crate::section::{Section, SectionVisibility};

use std::fmt::Write;

/// Placeholder text shown when there is no entry at the current position
pub const PLACEHOLDER: &str = "No entry to display.";

/// Full description of the browser's display regions
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserView {
    pub selector: SelectorView,
    pub entry: EntryDisplay,
    pub progress: ProgressView,
    /// Absent while the entry display shows the placeholder
    pub navigation: Option<NavigationView>,
    pub sections: SectionVisibility,
}

/// Dataset selector region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

impl SelectorView {
    pub fn selected_value(&self) -> Option<&str> {
        self.selected.and_then(|idx| self.options.get(idx)).map(String::as_str)
    }
}

/// Entry display region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDisplay {
    Placeholder,
    Entry(EntryView),
}

impl EntryDisplay {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, EntryDisplay::Placeholder)
    }

    pub fn as_entry(&self) -> Option<&EntryView> {
        match self {
            EntryDisplay::Entry(view) => Some(view),
            EntryDisplay::Placeholder => None,
        }
    }
}

/// Fields of the current entry, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    /// 1-based position in the dataset
    pub ordinal: usize,
    pub prompt_lines: Vec<String>,
    pub question_index: String,
    pub persona_index: String,
    pub response_lines: Vec<String>,
    pub response_parsed: String,
    /// Statement of the entry's question, when statements were loaded
    pub statement: Option<String>,
}

impl EntryView {
    /// Labelled rows after the heading, in display order
    pub fn fields(&self) -> Vec<(&'static str, Vec<&str>)> {
        let mut fields = vec![
            ("Prompt", self.prompt_lines.iter().map(String::as_str).collect()),
            ("Question Index", vec![self.question_index.as_str()]),
            ("Persona Index", vec![self.persona_index.as_str()]),
            ("Response", self.response_lines.iter().map(String::as_str).collect()),
            ("Response Parsed", vec![self.response_parsed.as_str()]),
        ];
        if let Some(statement) = &self.statement {
            fields.push(("Statement", vec![statement.as_str()]));
        }
        fields
    }

    pub fn heading(&self) -> String {
        format!("Entry {}", self.ordinal)
    }
}

/// Progress bar and progress text regions
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    /// Bar width in percent, `0.0..=100.0`
    pub percent: f64,
    pub text: String,
}

impl ProgressView {
    pub fn cleared() -> Self {
        Self { percent: 0.0, text: String::new() }
    }

    /// `(index + 1) / len * 100`; callers guarantee `index < len`
    pub fn at(index: usize, len: usize) -> Self {
        Self { percent: (index + 1) as f64 / len as f64 * 100.0, text: format!("Entry {} of {}", index + 1, len) }
    }

    /// Bar width as a CSS-style percentage
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Bar fill as a `0.0..=1.0` ratio
    pub fn ratio(&self) -> f64 {
        (self.percent / 100.0).clamp(0.0, 1.0)
    }
}

/// Actions offered by the navigation region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Previous,
    Next,
    /// Switch to the named section
    Section(Section),
    /// Open an external address
    Open { url: String },
}

impl NavAction {
    pub fn label(&self) -> &'static str {
        match self {
            NavAction::Previous => "<<<-Previous",
            NavAction::Next => "Next->>>",
            NavAction::Section(Section::MainNavigator) => "Back to Main",
            NavAction::Section(Section::EntryBrowser) => "Entries",
            NavAction::Section(Section::ResponseSummary) => "Response Summary",
            NavAction::Open { .. } => "View Terminal Output for This Run",
        }
    }
}

/// Navigation controls region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationView {
    pub actions: Vec<NavAction>,
    /// Checkout-relative terminal output path, for alternate display
    pub relative_link: String,
}

impl NavigationView {
    /// Address of the terminal output action
    pub fn terminal_output_url(&self) -> Option<&str> {
        self.actions.iter().find_map(|action| match action {
            NavAction::Open { url } => Some(url.as_str()),
            _ => None,
        })
    }
}

impl BrowserView {
    pub fn active_section(&self) -> Section {
        self.sections.active()
    }

    /// Plain-text rendering of the entry, progress and navigation regions
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();

        match &self.entry {
            EntryDisplay::Placeholder => {
                let _ = writeln!(out, "{}", PLACEHOLDER);
            }
            EntryDisplay::Entry(view) => {
                let _ = writeln!(out, "{}", view.heading());
                for (label, lines) in view.fields() {
                    let _ = writeln!(out, "{}: {}", label, lines.join("\n"));
                }
            }
        }

        let _ = writeln!(out, "[{}] {}", self.progress.width(), self.progress.text);

        if let Some(navigation) = &self.navigation {
            let labels: Vec<String> = navigation.actions.iter().map(|action| format!("[{}]", action.label())).collect();
            let _ = writeln!(out, "{}", labels.join(" "));
            if let Some(url) = navigation.terminal_output_url() {
                let _ = writeln!(out, "{}", url);
            }
        }

        out
    }
}
