use super::App;
use crate::components::{
    EntryPanel, Footer, MainNavigator, NavigationBar, ProgressBar, ResponseSummaryPanel, SelectorBar,
};
use crate::event_handler::Keybindings;
use crate::layout::TuiLayout;
use crate::state::AppState;
use crate::theme::Theme;

use ratatui::{Frame, Terminal, backend::CrosstermBackend, widgets::Block};
use std::io::Result;
use valueview_core::Section;

pub fn draw(app: &mut App, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, &app.state, &app.keybindings))?;
    Ok(())
}

/// Render the whole screen for the current state
pub fn render_frame(frame: &mut Frame<'_>, state: &AppState, keybindings: &Keybindings) {
    let area = frame.area();
    let theme = Theme::palette(state.theme_variant());
    let view = state.view();
    let section = state.active_section();
    let layout = TuiLayout::calculate(area, section);

    frame.render_widget(Block::default().style(theme.base()), area);

    SelectorBar::new(&view.selector, theme).render(frame, layout.selector);

    match section {
        Section::MainNavigator => MainNavigator::new(state, theme).render(frame, layout.body),
        Section::EntryBrowser => {
            EntryPanel::new(&view.entry, theme).with_scroll(state.ui.entry_scroll).render(frame, layout.body)
        }
        Section::ResponseSummary => {
            ResponseSummaryPanel::new(state.summary(), state.browser().statements(), theme)
                .with_dataset(state.browser().selected_key())
                .with_scroll(state.ui.summary_scroll)
                .render(frame, layout.body);
        }
    }

    if let Some(progress_area) = layout.progress {
        ProgressBar::new(&view.progress, theme).render(frame, progress_area);
    }
    if let Some(navigation_area) = layout.navigation {
        NavigationBar::new(view.navigation.as_ref(), theme).render(frame, navigation_area);
    }

    let hints = keybindings.hints(section);
    Footer::new(state.ui.status.as_ref(), &hints, layout.mode, theme).render(frame, layout.footer);
}
