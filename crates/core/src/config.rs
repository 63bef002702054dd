use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::loader::SourceLocation;

/// Color themes for the terminal browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    /// Bluish dark palette (default)
    #[default]
    Dark,
    /// Light palette for bright terminals
    Light,
}

impl ThemeName {
    pub const VALUES: &[ThemeName] = &[ThemeName::Dark, ThemeName::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ThemeName {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(ThemeName::Dark),
            "light" => Ok(ThemeName::Light),
            _ => Err(crate::Error::Config(ConfigError::InvalidTheme(s.to_string()).to_string())),
        }
    }
}

/// Where the datasets and question statements come from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Directory searched for `prompts-response.jsonl` runs
    #[serde(default)]
    pub runs_dir: Option<PathBuf>,

    /// JSON object or generated `data.js` holding every dataset
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// `questions.jsonl` with the statement behind each question id
    #[serde(default)]
    pub questions_file: Option<PathBuf>,

    /// Dataset loaded first instead of the first key
    #[serde(default)]
    pub default_dataset: Option<String>,
}

impl DataConfig {
    /// Configured source, if any; `data_file` and `runs_dir` are exclusive
    pub fn location(&self) -> Option<SourceLocation> {
        match (&self.runs_dir, &self.data_file) {
            (Some(dir), _) => Some(SourceLocation::RunsDir(dir.clone())),
            (None, Some(file)) => Some(SourceLocation::DataFile(file.clone())),
            (None, None) => None,
        }
    }
}

/// Terminal browser settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeName,

    /// Entries skipped by page up/down
    #[serde(default = "default_page_step")]
    pub page_step: u32,
}

fn default_page_step() -> u32 {
    10
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: ThemeName::default(), page_step: default_page_step() }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty`, `json` or `compact`
    #[serde(default = "default_log_format")]
    pub format: String,

    #[serde(default)]
    pub file: FileLoggingConfig,
}

/// `[logging.file]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileLoggingConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_file_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_file_log_level() -> String {
    "debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format(), file: FileLoggingConfig::default() }
    }
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self { enabled: false, level: default_file_log_level() }
    }
}

/// Root configuration structure for valueview.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| crate::Error::Config(ConfigError::from(e).to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    ///
    /// Relative data paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            config.data.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        use crate::Error;

        if self.data.runs_dir.is_some() && self.data.data_file.is_some() {
            return Err(Error::Config(ConfigError::ConflictingSources.to_string()));
        }

        if self.ui.page_step == 0 {
            return Err(Error::Config(ConfigError::InvalidPageStep.to_string()));
        }

        if crate::logging::LogFormat::parse_str(&self.logging.format).is_none() {
            return Err(Error::Config(
                ConfigError::InvalidLogFormat(self.logging.format.clone()).to_string(),
            ));
        }

        Ok(())
    }

    /// Get example configuration (as a string)
    pub fn example() -> &'static str {
        r#"# valueview configuration
# Copy this file to valueview.toml and adjust the paths

[data]
# Directory holding one sub-directory per run, each with prompts-response.jsonl
runs_dir = "runs"
# Alternatively, a JSON object or generated data.js with every dataset
# (cannot be combined with runs_dir)
# data_file = "accessibility/data.js"
# Question statements shown next to each entry (optional)
# questions_file = "benchmark/questions.jsonl"
# Dataset shown first (default: first dataset by name)
# default_dataset = "run_50_1_gpt-3.5-turbo-1106"

[ui]
# Theme: "dark" or "light"
theme = "dark"
# Entries skipped by PageUp/PageDown
page_step = 10

[logging]
# Filter directive, overridden by VALUEVIEW_LOG or RUST_LOG
level = "warn"
# Output format: "pretty", "json", or "compact"
format = "pretty"

[logging.file]
# Daily rolling JSON logs under ~/.valueview/logs (or VALUEVIEW_LOG_DIR)
enabled = false
level = "debug"
"#
    }
}

impl DataConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.runs_dir, &mut self.data_file, &mut self.questions_file].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Both a runs directory and a data file were configured
    #[error("runs_dir and data_file cannot both be set")]
    ConflictingSources,

    /// Invalid log format
    #[error("invalid log format: {0}")]
    InvalidLogFormat(String),

    /// Invalid theme
    #[error("invalid theme: {0}")]
    InvalidTheme(String),

    /// Page step must move at least one entry
    #[error("page_step must be at least 1")]
    InvalidPageStep,

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use tempfile::TempDir;

    #[test]
    fn test_theme_values() {
        assert_eq!(ThemeName::VALUES.len(), 2);
        assert_eq!(ThemeName::Dark.as_str(), "dark");
        assert_eq!(ThemeName::Light.to_string(), "light");
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!(ThemeName::from_str("dark").unwrap(), ThemeName::Dark);
        assert_eq!(ThemeName::from_str("LIGHT").unwrap(), ThemeName::Light);
        assert!(ThemeName::from_str("solarized").is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.data.location().is_none());
        assert_eq!(config.ui.theme, ThemeName::Dark);
        assert_eq!(config.ui.page_step, 10);
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.file.enabled);
    }

    #[test]
    fn test_config_from_empty_toml() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_example_parses() {
        let config = Config::from_toml_str(Config::example()).unwrap();
        assert_eq!(config.data.runs_dir, Some(PathBuf::from("runs")));
        assert!(config.data.data_file.is_none());
        assert_eq!(config.ui.page_step, 10);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_config_data_file() {
        let toml_str = r#"
[data]
data_file = "accessibility/data.js"
questions_file = "benchmark/questions.jsonl"
default_dataset = "run_50_1_gpt-4"

[ui]
theme = "light"
page_step = 25
"#;
        let config = Config::from_toml_str(toml_str).unwrap();
        assert_eq!(
            config.data.location(),
            Some(SourceLocation::DataFile(PathBuf::from("accessibility/data.js")))
        );
        assert_eq!(config.data.default_dataset.as_deref(), Some("run_50_1_gpt-4"));
        assert_eq!(config.ui.theme, ThemeName::Light);
        assert_eq!(config.ui.page_step, 25);
    }

    #[test]
    fn test_config_conflicting_sources() {
        let toml_str = r#"
[data]
runs_dir = "runs"
data_file = "data.js"
"#;
        let err = Config::from_toml_str(toml_str).unwrap_err();
        assert!(err.to_string().contains("cannot both be set"));
    }

    #[test]
    fn test_config_invalid_page_step() {
        let err = Config::from_toml_str("[ui]\npage_step = 0\n").unwrap_err();
        assert!(err.to_string().contains("page_step"));
    }

    #[test]
    fn test_config_invalid_log_format() {
        let err = Config::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(err.to_string().contains("invalid log format: xml"));
    }

    #[test]
    fn test_config_unknown_field() {
        let err = Config::from_toml_str("[data]\nrun_dir = \"runs\"\n").unwrap_err();
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_config_from_file_resolves_relative_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("valueview.toml");
        std::fs::write(&path, "[data]\nruns_dir = \"runs\"\nquestions_file = \"/abs/questions.jsonl\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.data.runs_dir, Some(temp.path().join("runs")));
        assert_eq!(config.data.questions_file, Some(PathBuf::from("/abs/questions.jsonl")));
    }

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::ConflictingSources.to_string(),
            "runs_dir and data_file cannot both be set"
        );
        assert_eq!(ConfigError::InvalidTheme("x".to_string()).to_string(), "invalid theme: x");
        assert_eq!(ConfigError::InvalidPageStep.to_string(), "page_step must be at least 1");
    }

    #[test]
    fn test_config_malformed_toml() {
        let err = Config::from_toml_str("[ui\ntheme = \"dark\"\n").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("configuration error: TOML parse error: "));
        assert!(matches!(err, crate::Error::Config(_)));
    }
}
