use ratatui::layout::{Constraint, Direction, Layout, Rect};
use valueview_core::Section;

/// Layout breakpoints for responsive TUI
///
/// - >= 100 cols: Full layout, all key hints
/// - 80-99 cols: Medium layout, short key hints
/// - < 80 cols: Compact layout, hints hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Full,
    Medium,
    Compact,
}

impl From<u16> for LayoutMode {
    fn from(width: u16) -> Self {
        match width {
            w if w >= 100 => Self::Full,
            w if w >= 80 => Self::Medium,
            _ => Self::Compact,
        }
    }
}

impl LayoutMode {
    pub fn shows_hints(&self) -> bool {
        !matches!(self, Self::Compact)
    }
}

/// Calculated layout for one frame
#[derive(Debug, Clone)]
pub struct TuiLayout {
    pub mode: LayoutMode,
    /// Dataset tabs (3 lines, bordered)
    pub selector: Rect,
    /// The visible section
    pub body: Rect,
    /// Progress gauge (entry browser only)
    pub progress: Option<Rect>,
    /// Navigation controls (entry browser only)
    pub navigation: Option<Rect>,
    /// Hints and status line
    pub footer: Rect,
}

impl TuiLayout {
    pub fn calculate(area: Rect, section: Section) -> Self {
        let mode = LayoutMode::from(area.width);

        if section == Section::EntryBrowser {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(2),
                    Constraint::Length(1),
                ])
                .split(area);

            return Self {
                mode,
                selector: chunks[0],
                body: chunks[1],
                progress: Some(chunks[2]),
                navigation: Some(chunks[3]),
                footer: chunks[4],
            };
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        Self { mode, selector: chunks[0], body: chunks[1], progress: None, navigation: None, footer: chunks[2] }
    }
}
