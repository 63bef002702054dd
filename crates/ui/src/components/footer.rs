use crate::layout::LayoutMode;
use crate::state::StatusMessage;
use crate::theme::ThemePalette;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

const HINT_GAP: &str = "  ";

/// Status message on the left, key hints on the right
///
/// Hints are dropped from the end until they fit; compact terminals show none.
pub struct Footer<'a> {
    status: Option<&'a StatusMessage>,
    hints: &'a [(&'static str, &'static str)],
    mode: LayoutMode,
    theme: ThemePalette,
}

impl<'a> Footer<'a> {
    pub fn new(
        status: Option<&'a StatusMessage>, hints: &'a [(&'static str, &'static str)], mode: LayoutMode,
        theme: ThemePalette,
    ) -> Self {
        Self { status, hints, mode, theme }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let status_width = self.status.map(|status| status.text.width() as u16 + 1).unwrap_or(0);
        let hint_budget = area.width.saturating_sub(status_width) as usize;
        let hints = if self.mode.shows_hints() { fit_hints(self.hints, hint_budget) } else { Vec::new() };
        let hints_width: usize = hints.iter().map(|span| span.width()).sum();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(hints_width as u16)])
            .split(area);

        if let Some(status) = self.status {
            let style = if status.is_error { self.theme.error() } else { self.theme.base() };
            frame.render_widget(Paragraph::new(Span::styled(status.text.clone(), style)), chunks[0]);
        }

        let styled: Vec<Span> = hints
            .into_iter()
            .map(|span| {
                let style = if span.content.starts_with(' ') { self.theme.muted() } else { self.theme.key_hint() };
                span.style(style)
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(styled)).alignment(Alignment::Right), chunks[1]);
    }
}

/// Key and description spans for as many hints as fit in `width`
pub fn fit_hints(hints: &[(&'static str, &'static str)], width: usize) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut used = 0;

    for (idx, (key, description)) in hints.iter().enumerate() {
        let gap = if idx == 0 { 0 } else { HINT_GAP.len() };
        let description = format!(" {}", description);
        let needed = gap + key.width() + description.width();
        if used + needed > width {
            break;
        }
        if gap > 0 {
            spans.push(Span::raw(HINT_GAP));
        }
        spans.push(Span::raw(*key));
        spans.push(Span::raw(description));
        used += needed;
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend};

    const HINTS: &[(&str, &str)] = &[("←", "prev"), ("→", "next"), ("q", "quit")];

    fn render(footer: &Footer<'_>, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                footer.render(frame, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_fit_hints_all() {
        let spans = fit_hints(HINTS, 80);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "← prev  → next  q quit");
    }

    #[test]
    fn test_fit_hints_drops_from_end() {
        let spans = fit_hints(HINTS, 14);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "← prev  → next");
        assert!(fit_hints(HINTS, 3).is_empty());
    }

    #[test]
    fn test_render_status_and_hints() {
        let status = StatusMessage::info("Theme switched to light");
        let footer = Footer::new(Some(&status), HINTS, LayoutMode::Full, Theme::DARK);
        let row = render(&footer, 100);
        assert!(row.starts_with("Theme switched to light"));
        assert!(row.trim_end().ends_with("q quit"));
    }

    #[test]
    fn test_compact_mode_hides_hints() {
        let footer = Footer::new(None, HINTS, LayoutMode::Compact, Theme::DARK);
        let row = render(&footer, 60);
        assert!(row.trim().is_empty());
    }
}
