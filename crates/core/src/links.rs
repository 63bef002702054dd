//! Links to the per-run terminal output pages.
//!
//! Every dataset key names a run directory whose console transcript was saved
//! as `ask_question_terminal.html`. The hosted copy is served through
//! htmlpreview from the public repository; the relative copy sits next to the
//! accessibility pages in a local checkout.

const PREVIEW_PREFIX: &str = "https://htmlpreview.github.io/?https://github.com/brucewlee/values/blob/main/runs/";
const RELATIVE_PREFIX: &str = "../runs/";
const TERMINAL_PAGE: &str = "ask_question_terminal.html";

/// Both addresses of a run's terminal output page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalOutputLink {
    /// Hosted preview address, the one surfaced as a navigation action
    pub url: String,
    /// Checkout-relative address, kept for alternate display
    pub relative: String,
}

impl TerminalOutputLink {
    pub fn for_key(key: &str) -> Self {
        Self { url: terminal_output_url(key), relative: relative_terminal_output_path(key) }
    }
}

/// Hosted terminal output address for a dataset key
pub fn terminal_output_url(key: &str) -> String {
    format!("{}{}/{}", PREVIEW_PREFIX, key, TERMINAL_PAGE)
}

/// Checkout-relative terminal output path for a dataset key
pub fn relative_terminal_output_path(key: &str) -> String {
    format!("{}{}/{}", RELATIVE_PREFIX, key, TERMINAL_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_output_url() {
        let url = terminal_output_url("run_50_1_gpt-3.5-turbo-1106");
        assert_eq!(
            url,
            "https://htmlpreview.github.io/?https://github.com/brucewlee/values/blob/main/runs/run_50_1_gpt-3.5-turbo-1106/ask_question_terminal.html"
        );
        assert!(url.contains("runs/run_50_1_gpt-3.5-turbo-1106/ask_question_terminal.html"));
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(
            relative_terminal_output_path("run_1"),
            "../runs/run_1/ask_question_terminal.html"
        );
    }

    #[test]
    fn test_link_for_key_keeps_key_verbatim() {
        let link = TerminalOutputLink::for_key("run_50_1_anthropic.claude-3-sonnet-20240229-v1:0");
        assert!(link.url.ends_with("runs/run_50_1_anthropic.claude-3-sonnet-20240229-v1:0/ask_question_terminal.html"));
        assert!(link.relative.starts_with("../runs/run_50_1_anthropic"));
    }
}
