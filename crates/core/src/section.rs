use crate::error::BrowserError;

/// Mutually exclusive display sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Landing section listing every dataset
    #[default]
    MainNavigator,
    /// One entry at a time with navigation and progress
    EntryBrowser,
    /// Response distribution for the selected dataset
    ResponseSummary,
}

impl Section {
    pub const VALUES: &[Section] = &[Section::MainNavigator, Section::EntryBrowser, Section::ResponseSummary];

    /// Section id as used by navigation actions
    pub fn id(&self) -> &'static str {
        match self {
            Section::MainNavigator => "mainNavigator",
            Section::EntryBrowser => "entryBrowser",
            Section::ResponseSummary => "responseSummary",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::MainNavigator => "Datasets",
            Section::EntryBrowser => "Entries",
            Section::ResponseSummary => "Response Summary",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for Section {
    type Err = BrowserError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Section::VALUES
            .iter()
            .copied()
            .find(|section| section.id() == s)
            .ok_or_else(|| BrowserError::UnknownSection(s.to_string()))
    }
}

/// Radio-style visibility over [`Section::VALUES`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionVisibility {
    visible: [bool; 3],
}

impl SectionVisibility {
    /// Only `section` visible
    pub fn only(section: Section) -> Self {
        let mut visibility = Self { visible: [false; 3] };
        visibility.show(section);
        visibility
    }

    /// Hide every section, then show `section`
    pub fn show(&mut self, section: Section) {
        for (slot, candidate) in self.visible.iter_mut().zip(Section::VALUES) {
            *slot = *candidate == section;
        }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        Section::VALUES
            .iter()
            .position(|candidate| *candidate == section)
            .is_some_and(|idx| self.visible[idx])
    }

    /// The visible section
    pub fn active(&self) -> Section {
        Section::VALUES
            .iter()
            .zip(self.visible)
            .find_map(|(section, visible)| visible.then_some(*section))
            .unwrap_or_default()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|visible| **visible).count()
    }
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self::only(Section::default())
    }
}
