pub mod app;
pub mod components;
pub mod event_handler;
pub mod layout;
pub mod state;
pub mod theme;

pub use app::{App, opener_command, render_frame};
pub use event_handler::{EventHandler, KeyAction, Keybindings};
pub use state::{AppState, StatusMessage, UiState};
pub use theme::{Theme, ThemePalette, ThemeVariant};
