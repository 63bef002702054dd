use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use valueview_core::logging::{self, LoggingConfig};
use valueview_core::{Config, EntryBrowser, QuestionStatements, ResponseCounts, TerminalOutputLink, ThemeName};
use valueview_ui::{App, AppState, ThemeVariant};

const DEFAULT_CONFIG_FILE: &str = "valueview.toml";

/// valueview - browse recorded question/response runs
#[derive(Parser, Debug)]
#[command(name = "valueview")]
#[command(about = "Page through recorded prompt/response datasets in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a config file (default: ./valueview.toml when present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory of run sub-directories holding prompts-response.jsonl
    #[arg(long, value_name = "DIR", conflicts_with = "data")]
    runs: Option<PathBuf>,

    /// JSON data file or generated data.js
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// JSONL file of question statements
    #[arg(long, value_name = "FILE")]
    questions: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Browse datasets in the interactive TUI (default)
    Browse {
        /// Dataset to load first
        #[arg(short, long, value_name = "KEY")]
        dataset: Option<String>,

        /// Color theme, overriding the config
        #[arg(long, value_name = "THEME")]
        theme: Option<ThemeName>,
    },
    /// List dataset keys with their entry counts
    List,
    /// Print one entry as text
    Show {
        #[arg(value_name = "KEY")]
        key: String,

        /// 1-based entry number; out-of-range values are clamped
        #[arg(short, long, value_name = "N", default_value_t = 1)]
        index: i64,
    },
    /// Print the per-question response distribution of a dataset
    Stats {
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Print the terminal output links of a dataset
    Link {
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse { dataset: None, theme: None });

    if let Commands::Completions { shell } = command {
        cmd_completions(shell);
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => load_or_create_config(path)?,
        None => load_default_config(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    apply_overrides(&mut config, cli.runs, cli.data, cli.questions);

    let is_tui = matches!(command, Commands::Browse { .. });
    let _log_guard = init_logging(&config, cli.verbose, is_tui)?;

    if cli.verbose {
        if let Some(location) = config.data.location() {
            eprintln!("{} Using {}", "Info:".blue().bold(), location);
        }
        if let Some(questions) = &config.data.questions_file {
            eprintln!("{} Question statements: {}", "Info:".blue().bold(), questions.display());
        }
    }

    match command {
        Commands::Browse { dataset, theme } => cmd_browse(&config, dataset, theme),
        Commands::List => cmd_list(&config),
        Commands::Show { key, index } => cmd_show(&config, &key, index),
        Commands::Stats { key } => cmd_stats(&config, &key),
        Commands::Link { key } => cmd_link(&config, &key),
        Commands::Completions { .. } => Ok(()),
    }
}

/// Load config from file or create it from the example
fn load_or_create_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::from_file(path).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    } else {
        eprintln!("{} Config not found at {}", "Warning:".yellow().bold(), path.display());

        std::fs::write(path, Config::example()).context("Failed to create config")?;

        eprintln!("{} Created config at {}", "Success:".green().bold(), path.display());

        anyhow::bail!("Please edit {} with your data paths and run again", path.display())
    }
}

/// Load `path` when it exists, otherwise fall back to defaults
fn load_default_config(path: &Path) -> Result<Config> {
    if path.is_file() {
        Config::from_file(path).map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    } else {
        Ok(Config::default())
    }
}

/// Command-line data paths replace the configured ones
fn apply_overrides(config: &mut Config, runs: Option<PathBuf>, data: Option<PathBuf>, questions: Option<PathBuf>) {
    if let Some(runs) = runs {
        config.data.runs_dir = Some(runs);
        config.data.data_file = None;
    }
    if let Some(data) = data {
        config.data.data_file = Some(data);
        config.data.runs_dir = None;
    }
    if questions.is_some() {
        config.data.questions_file = questions;
    }
}

fn init_logging(config: &Config, verbose: bool, is_tui: bool) -> Result<Option<logging::WorkerGuard>> {
    let mut logging_config = LoggingConfig::from(config.logging.clone());
    if verbose {
        logging_config = logging_config.with_level("debug");
    }
    if is_tui {
        logging_config = logging_config.without_stderr();
    }
    logging::init_logging(Some(logging_config)).context("Failed to initialize logging")
}

/// Load the configured source into a browser, attaching question statements
fn load_browser(config: &Config, default_key: Option<&str>) -> Result<EntryBrowser> {
    let location = config
        .data
        .location()
        .context("No data source configured; pass --runs or --data, or set [data] in valueview.toml")?;

    let data = location.load().with_context(|| format!("Failed to load {}", location))?;

    let statements = match &config.data.questions_file {
        Some(path) => Some(
            QuestionStatements::from_jsonl_file(path)
                .with_context(|| format!("Failed to load question statements from {}", path.display()))?,
        ),
        None => data.statements,
    };

    let browser = match default_key.or(config.data.default_dataset.as_deref()) {
        Some(key) => EntryBrowser::with_default(data.source, key)?,
        None => EntryBrowser::new(data.source),
    };

    Ok(match statements {
        Some(statements) => browser.with_statements(statements),
        None => browser,
    })
}

/// Run the interactive TUI
fn cmd_browse(config: &Config, dataset: Option<String>, theme: Option<ThemeName>) -> Result<()> {
    let browser = load_browser(config, dataset.as_deref())?;
    let theme = ThemeVariant::from(theme.unwrap_or(config.ui.theme));
    let state = AppState::new(browser).with_theme(theme).with_page_step(config.ui.page_step);

    tracing::info!(datasets = state.browser().source().len(), "starting browser");
    let mut app = App::new(state);
    app.run().context("Terminal error")?;
    Ok(())
}

fn cmd_list(config: &Config) -> Result<()> {
    let browser = load_browser(config, None)?;
    let source = browser.source();
    if source.is_empty() {
        println!("{}", "No datasets found".yellow());
        return Ok(());
    }

    let width = source.keys().map(str::len).max().unwrap_or(0);
    for (key, dataset) in source.iter() {
        println!("{:<width$}  {}", key.cyan(), dataset.len(), width = width);
    }
    Ok(())
}

fn cmd_show(config: &Config, key: &str, index: i64) -> Result<()> {
    let mut browser = load_browser(config, None)?;
    browser.load_dataset(key)?;
    let view = browser.navigate(index.saturating_sub(1));
    print!("{}", view.to_plain_text());
    Ok(())
}

fn cmd_stats(config: &Config, key: &str) -> Result<()> {
    let browser = load_browser(config, None)?;
    let dataset = browser
        .source()
        .get(key)
        .ok_or_else(|| valueview_core::BrowserError::UnknownDataset(key.to_string()))?;

    println!("{}", format_stats(&ResponseCounts::from_dataset(dataset), browser.statements()));
    Ok(())
}

fn format_stats(counts: &ResponseCounts, statements: &QuestionStatements) -> String {
    if counts.is_empty() {
        return "No responses to summarize.".to_string();
    }

    let mut lines = Vec::new();
    for tally in counts.tallies() {
        let responses: Vec<String> =
            tally.responses.iter().map(|(response, count)| format!("{}: {}", response, count)).collect();
        let mut line = format!("Question {} ({} total): {}", tally.question, tally.total(), responses.join("  "));
        if let Some(statement) = statements.statement_for_key(tally.question) {
            line.push_str(&format!(" | {}", statement));
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn cmd_link(config: &Config, key: &str) -> Result<()> {
    let browser = load_browser(config, None)?;
    if !browser.source().contains_key(key) {
        return Err(valueview_core::BrowserError::UnknownDataset(key.to_string()).into());
    }

    let link = TerminalOutputLink::for_key(key);
    println!("{}", link.url);
    println!("{}", link.relative);
    Ok(())
}

fn cmd_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}
