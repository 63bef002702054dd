use valueview_core::Section;

/// Actions that can be triggered by key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Previous entry
    PreviousEntry,
    /// Next entry
    NextEntry,
    /// Back by the configured page step
    PageUp,
    /// Forward by the configured page step
    PageDown,
    /// Jump to the first entry
    FirstEntry,
    /// Jump to the last entry
    LastEntry,
    /// Select and load the next dataset
    NextDataset,
    /// Select and load the previous dataset
    PreviousDataset,
    /// Move the main navigator highlight up
    NavigatorUp,
    /// Move the main navigator highlight down
    NavigatorDown,
    /// Load the highlighted dataset and browse it
    OpenSelected,
    /// Make a section the only visible one
    ShowSection(Section),
    /// Open the run's terminal output page
    OpenTerminalOutput,
    /// Scroll the visible panel up by one line
    ScrollUp,
    /// Scroll the visible panel down by one line
    ScrollDown,
    /// Toggle theme variant
    ToggleTheme,
    /// Exit the TUI application
    Exit,
}

impl KeyAction {
    /// Short description for the footer
    pub fn description(&self) -> &'static str {
        match self {
            KeyAction::PreviousEntry => "prev",
            KeyAction::NextEntry => "next",
            KeyAction::PageUp => "page up",
            KeyAction::PageDown => "page down",
            KeyAction::FirstEntry => "first",
            KeyAction::LastEntry => "last",
            KeyAction::NextDataset => "next dataset",
            KeyAction::PreviousDataset => "prev dataset",
            KeyAction::NavigatorUp => "up",
            KeyAction::NavigatorDown => "down",
            KeyAction::OpenSelected => "open",
            KeyAction::ShowSection(Section::MainNavigator) => "main",
            KeyAction::ShowSection(Section::EntryBrowser) => "entries",
            KeyAction::ShowSection(Section::ResponseSummary) => "summary",
            KeyAction::OpenTerminalOutput => "terminal output",
            KeyAction::ScrollUp => "scroll up",
            KeyAction::ScrollDown => "scroll down",
            KeyAction::ToggleTheme => "theme",
            KeyAction::Exit => "quit",
        }
    }
}
