pub mod entry;
pub mod footer;
pub mod main_navigator;
pub mod navigation;
pub mod progress;
pub mod response_summary;
pub mod selector;

pub use entry::EntryPanel;
pub use footer::Footer;
pub use main_navigator::MainNavigator;
pub use navigation::NavigationBar;
pub use progress::ProgressBar;
pub use response_summary::ResponseSummaryPanel;
pub use selector::SelectorBar;
