use crate::theme::ThemePalette;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use valueview_core::{EntryDisplay, PLACEHOLDER};

/// Current entry, one labelled block per field
///
/// Field values keep their own line breaks and are wrapped to the panel
/// width. Content taller than the panel scrolls.
pub struct EntryPanel<'a> {
    entry: &'a EntryDisplay,
    scroll: u16,
    theme: ThemePalette,
}

impl<'a> EntryPanel<'a> {
    pub fn new(entry: &'a EntryDisplay, theme: ThemePalette) -> Self {
        Self { entry, scroll: 0, theme }
    }

    pub fn with_scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }

    /// Wrapped lines for a panel whose inner width is `width`
    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let Some(view) = self.entry.as_entry() else {
            return vec![Line::from(PLACEHOLDER)];
        };

        let wrap_width = (width as usize).saturating_sub(2).max(1);
        let mut lines = Vec::new();

        for (idx, (label, values)) in view.fields().into_iter().enumerate() {
            if idx > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(format!("{}:", label), self.theme.label())));

            for value in values {
                if value.is_empty() {
                    lines.push(Line::default());
                    continue;
                }
                for wrapped in textwrap::wrap(value, wrap_width) {
                    lines.push(Line::from(Span::styled(format!("  {}", wrapped), self.theme.base())));
                }
            }
        }

        lines
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let title = match self.entry.as_entry() {
            Some(view) => format!(" {} ", view.heading()),
            None => " Entry ".to_string(),
        };
        let block = Block::bordered().title(title).border_style(self.theme.border()).style(self.theme.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.entry.is_placeholder() {
            let placeholder = Paragraph::new(PLACEHOLDER).style(self.theme.muted()).alignment(Alignment::Center);
            frame.render_widget(placeholder, inner);
            return;
        }

        let lines = self.lines(inner.width);
        let max_scroll = lines.len().saturating_sub(inner.height as usize);
        let scroll = (self.scroll as usize).min(max_scroll) as u16;

        frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);
    }
}
