use super::App;
use crate::state::StatusMessage;

use std::io::{self, Write};
use std::{env, process::Command};

/// Build the command that opens `url` in a browser
///
/// `$BROWSER` wins when set; a `%s` in it is replaced by the address,
/// otherwise the address is appended.
pub fn opener_command(url: &str, browser: Option<&str>) -> Command {
    if let Some(browser) = browser.map(str::trim).filter(|b| !b.is_empty()) {
        let mut parts = browser.split_whitespace();
        let program = parts.next().unwrap_or(browser);
        let mut command = Command::new(program);
        let mut substituted = false;
        for part in parts {
            if part.contains("%s") {
                command.arg(part.replace("%s", url));
                substituted = true;
            } else {
                command.arg(part);
            }
        }
        if !substituted {
            command.arg(url);
        }
        return command;
    }

    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}

pub fn open_terminal_output(app: &mut App) {
    let Some(url) = app.state.view().navigation.as_ref().and_then(|nav| nav.terminal_output_url()).map(String::from)
    else {
        app.state.set_status(StatusMessage::error("No dataset loaded"));
        return;
    };

    let browser = env::var("BROWSER").ok();
    let mut command = opener_command(&url, browser.as_deref());
    tracing::info!(%url, program = ?command.get_program(), "opening terminal output");

    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen);
    let _ = io::stdout().flush();

    let result = command.status();

    let _ = crossterm::terminal::enable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen);

    let status = match result {
        Ok(status) if status.success() => StatusMessage::info(format!("Opened {}", url)),
        Ok(status) => {
            tracing::warn!(%status, "browser exited with failure");
            StatusMessage::error(format!("Browser exited with {}: {}", status, url))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to launch browser");
            StatusMessage::error(format!("Failed to open browser: {}", e))
        }
    };
    app.state.set_status(status);
    app.state.ui.needs_clear = true;
}
