use super::App;
use crate::event_handler::EventHandler;

use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::Result;
use std::panic;

pub fn run(app: &mut App) -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let backend = CrosstermBackend::new(std::io::stdout());
        if let Ok(mut terminal) = Terminal::new(backend) {
            let _ = terminal.show_cursor();
        }
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    terminal.clear()?;
    app.draw(&mut terminal)?;
    tracing::debug!("event loop started");

    while !app.should_exit() {
        let Some(event) = EventHandler::read() else {
            continue;
        };

        app.handle_event(event);

        if app.state.ui.needs_clear {
            terminal.clear()?;
            app.state.ui.needs_clear = false;
        }
        app.draw(&mut terminal)?;
    }

    tracing::debug!("event loop finished");

    terminal.show_cursor()?;
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;

    Ok(())
}
