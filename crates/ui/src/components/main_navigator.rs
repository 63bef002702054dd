use crate::state::AppState;
use crate::theme::ThemePalette;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
};

/// Dataset list with entry counts; Enter loads the highlighted dataset
pub struct MainNavigator<'a> {
    state: &'a AppState,
    theme: ThemePalette,
}

impl<'a> MainNavigator<'a> {
    pub fn new(state: &'a AppState, theme: ThemePalette) -> Self {
        Self { state, theme }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let source = self.state.browser().source();
        let loaded = self.state.browser().selected_key();

        let summary = format!(" {} datasets, {} ", source.len(), entries_label(source.entry_count()));
        let block = Block::bordered()
            .title(" Datasets ")
            .title_bottom(Line::from(summary).right_aligned())
            .border_style(self.theme.border())
            .style(self.theme.base());

        if source.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(Paragraph::new("No datasets loaded").style(self.theme.muted()), inner);
            return;
        }

        let items: Vec<ListItem> = source
            .iter()
            .map(|(key, dataset)| {
                let marker = if Some(key) == loaded { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, self.theme.key_hint()),
                    Span::styled(key.to_string(), self.theme.base()),
                    Span::styled(format!("  {}", entries_label(dataset.len())), self.theme.muted()),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(self.theme.selected()).highlight_symbol("▸ ");
        let mut list_state = ListState::default().with_selected(self.state.view().selector.selected);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}

fn entries_label(count: usize) -> String {
    if count == 1 { "1 entry".to_string() } else { format!("{} entries", count) }
}
