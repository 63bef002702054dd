use crate::theme::ThemePalette;

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Paragraph, Tabs},
};
use std::ops::Range;
use unicode_width::UnicodeWidthStr;
use valueview_core::SelectorView;

/// Padding plus divider around each tab title
const TAB_CHROME: usize = 3;

/// Dataset selector rendered as a row of tabs
///
/// When the tabs do not fit, a window around the selected tab is shown.
pub struct SelectorBar<'a> {
    view: &'a SelectorView,
    theme: ThemePalette,
}

impl<'a> SelectorBar<'a> {
    pub fn new(view: &'a SelectorView, theme: ThemePalette) -> Self {
        Self { view, theme }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let position = match (self.view.selected, self.view.options.len()) {
            (_, 0) => None,
            (Some(selected), len) => Some(format!(" {}/{} ", selected + 1, len)),
            (None, len) => Some(format!(" {} ", len)),
        };

        let mut block =
            Block::bordered().title(" Dataset ").border_style(self.theme.border()).style(self.theme.base());
        if let Some(position) = position {
            block = block.title_top(ratatui::text::Line::from(position).right_aligned());
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.view.options.is_empty() {
            frame.render_widget(Paragraph::new("No datasets loaded").style(self.theme.muted()), inner);
            return;
        }

        let selected = self.view.selected.unwrap_or(0).min(self.view.options.len() - 1);
        let window = visible_window(&self.view.options, selected, inner.width as usize);
        let titles: Vec<&str> = self.view.options[window.clone()].iter().map(String::as_str).collect();

        let tabs = Tabs::new(titles)
            .select(selected - window.start)
            .style(self.theme.muted())
            .highlight_style(self.theme.selected())
            .divider("│");
        frame.render_widget(tabs, inner);
    }
}

/// Range of options that fits in `width` columns and contains `selected`
pub fn visible_window(options: &[String], selected: usize, width: usize) -> Range<usize> {
    if options.is_empty() {
        return 0..0;
    }

    let cost = |idx: usize| options[idx].width() + TAB_CHROME;
    let selected = selected.min(options.len() - 1);
    let (mut start, mut end) = (selected, selected + 1);
    let mut used = cost(selected);

    loop {
        let mut grew = false;
        if end < options.len() && used + cost(end) <= width {
            used += cost(end);
            end += 1;
            grew = true;
        }
        if start > 0 && used + cost(start - 1) <= width {
            used += cost(start - 1);
            start -= 1;
            grew = true;
        }
        if !grew {
            break;
        }
    }

    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use ratatui::{Terminal, backend::TestBackend};

    fn options(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_visible_window_fits_all() {
        let opts = options(&["a", "b", "c"]);
        assert_eq!(visible_window(&opts, 1, 80), 0..3);
    }

    #[test]
    fn test_visible_window_keeps_selected() {
        let opts = options(&["aaaa", "bbbb", "cccc", "dddd", "eeee"]);
        let window = visible_window(&opts, 4, 15);
        assert!(window.contains(&4));
        assert_eq!(window.len(), 2);

        let window = visible_window(&opts, 0, 15);
        assert_eq!(window, 0..2);
    }

    #[test]
    fn test_visible_window_too_narrow() {
        let opts = options(&["a-very-long-name"]);
        assert_eq!(visible_window(&opts, 0, 4), 0..1);
        assert_eq!(visible_window(&[], 0, 4), 0..0);
    }

    #[test]
    fn test_render_highlights_selected() {
        let view = SelectorView { options: options(&["run_a", "run_b"]), selected: Some(1) };
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                SelectorBar::new(&view, Theme::DARK).render(frame, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..40).map(|x| buffer[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("run_a"));
        assert!(row.contains("run_b"));

        let top: String = (0..40).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
        assert!(top.contains("Dataset"));
        assert!(top.contains("2/2"));
    }

    #[test]
    fn test_render_without_options() {
        let view = SelectorView { options: Vec::new(), selected: None };
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                SelectorBar::new(&view, Theme::DARK).render(frame, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row: String = (0..30).map(|x| buffer[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("No datasets loaded"));
    }
}
