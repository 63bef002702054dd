pub mod browser;
pub mod config;
pub mod dataset;
pub mod entry;
pub mod error;
pub mod links;
pub mod loader;
pub mod logging;
pub mod questions;
pub mod section;
pub mod selector;
pub mod stats;
pub mod view;

pub use browser::{EntryBrowser, Phase, ViewerState};
pub use config::{Config, ConfigError, DataConfig, ThemeName, UiConfig};
pub use dataset::{Dataset, DatasetSource};
pub use entry::{Entry, display_value};
pub use error::{BrowserError, DatasetError, Error, Result};
pub use links::{TerminalOutputLink, relative_terminal_output_path, terminal_output_url};
pub use loader::{LoadedData, RUN_FILE_NAME, SourceLocation, load_data_file, load_runs_dir};
pub use questions::QuestionStatements;
pub use section::{Section, SectionVisibility};
pub use selector::DatasetSelector;
pub use stats::{QuestionTally, ResponseCounts};
pub use view::{
    BrowserView, EntryDisplay, EntryView, NavAction, NavigationView, PLACEHOLDER, ProgressView, SelectorView,
};
