use crate::theme::ThemePalette;

use ratatui::{Frame, layout::Rect, style::Style, widgets::Gauge};
use valueview_core::ProgressView;

/// Position within the dataset as a gauge with "Entry i of n" inside
pub struct ProgressBar<'a> {
    progress: &'a ProgressView,
    theme: ThemePalette,
}

impl<'a> ProgressBar<'a> {
    pub fn new(progress: &'a ProgressView, theme: ThemePalette) -> Self {
        Self { progress, theme }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let gauge = Gauge::default()
            .ratio(self.progress.ratio())
            .label(self.progress.text.clone())
            .gauge_style(Style::default().fg(self.theme.blue).bg(self.theme.panel_bg))
            .use_unicode(true);
        frame.render_widget(gauge, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_row(progress: &ProgressView, width: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, 1)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                ProgressBar::new(progress, Theme::DARK).render(frame, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_label_is_progress_text() {
        let row = render_row(&ProgressView::at(1, 4), 40);
        assert!(row.contains("Entry 2 of 4"));
    }

    #[test]
    fn test_cleared_progress_has_no_label() {
        let row = render_row(&ProgressView::cleared(), 20);
        assert!(!row.contains('%'));
        assert!(!row.contains("Entry"));
    }

    #[test]
    fn test_half_filled() {
        let progress = ProgressView { percent: 50.0, text: String::new() };
        let row = render_row(&progress, 20);
        assert_eq!(row.chars().filter(|c| *c == '█').count(), 10);
        assert!(row.starts_with("██████████"));
    }
}
