mod app_state;
mod ui;

pub use app_state::AppState;
pub use ui::{StatusMessage, UiState};

#[cfg(test)]
pub(crate) use app_state::sample_browser;
