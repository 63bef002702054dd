//! Loading recorded datasets from disk.
//!
//! Two layouts are supported:
//!
//! - a runs directory, where every `prompts-response.jsonl` below it is one
//!   dataset named after its parent directory;
//! - a data file holding a JSON object of `{ key: [entry, ...] }`, or the
//!   generated `data.js` that assigns the same object to `var dataSets` (and
//!   optionally question statements to `var questionStatements`).
//!
//! Run directories have no inherent order, so their keys come out sorted by
//! name. A data file keeps the key order it was written with.

use crate::dataset::DatasetSource;
use crate::entry::Entry;
use crate::error::{DatasetError, Result};
use crate::questions::QuestionStatements;

use ignore::WalkBuilder;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// File name of a recorded run
pub const RUN_FILE_NAME: &str = "prompts-response.jsonl";

const DATASETS_VAR: &str = "dataSets";
const STATEMENTS_VAR: &str = "questionStatements";

/// Where the datasets live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    RunsDir(PathBuf),
    DataFile(PathBuf),
}

impl SourceLocation {
    pub fn path(&self) -> &Path {
        match self {
            SourceLocation::RunsDir(path) | SourceLocation::DataFile(path) => path,
        }
    }

    pub fn load(&self) -> Result<LoadedData> {
        match self {
            SourceLocation::RunsDir(path) => Ok(LoadedData { source: load_runs_dir(path)?, statements: None }),
            SourceLocation::DataFile(path) => load_data_file(path),
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceLocation::RunsDir(path) => write!(f, "runs directory {}", path.display()),
            SourceLocation::DataFile(path) => write!(f, "data file {}", path.display()),
        }
    }
}

/// Datasets plus any question statements bundled with them
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub source: DatasetSource,
    pub statements: Option<QuestionStatements>,
}

/// Parse a JSONL run body; blank lines are skipped, line numbers are 1-based
pub fn parse_jsonl(content: &str, path: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let entry: Entry = serde_json::from_str(line).map_err(|e| DatasetError::InvalidEntry {
            path: path.to_path_buf(),
            line: idx + 1,
            reason: e.to_string(),
        })?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Collect every run file below `runs_dir`, keyed by its directory name
pub fn load_runs_dir(runs_dir: &Path) -> Result<DatasetSource> {
    if !runs_dir.is_dir() {
        return Err(DatasetError::NotFound(runs_dir.to_path_buf()).into());
    }

    let walker = WalkBuilder::new(runs_dir)
        .hidden(true)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .follow_links(false)
        .build();

    let mut runs: BTreeMap<String, PathBuf> = BTreeMap::new();
    for entry in walker.flatten() {
        let path = entry.path();
        if path.file_name().and_then(|name| name.to_str()) != Some(RUN_FILE_NAME) {
            continue;
        }
        let Some(key) = dataset_key(path) else {
            tracing::warn!(path = %path.display(), "skipping run file without a parent directory name");
            continue;
        };
        if let Some(previous) = runs.insert(key.clone(), path.to_path_buf()) {
            tracing::warn!(
                dataset = %key,
                replaced = %previous.display(),
                "duplicate dataset name, keeping {}",
                path.display()
            );
        }
    }

    if runs.is_empty() {
        return Err(DatasetError::Empty(runs_dir.to_path_buf()).into());
    }

    let mut source = DatasetSource::new();
    for (key, path) in runs {
        let content = std::fs::read_to_string(&path)?;
        let entries = parse_jsonl(&content, &path)?;
        tracing::debug!(dataset = %key, entries = entries.len(), "loaded run");
        source.insert(key, entries);
    }

    tracing::info!(
        datasets = source.len(),
        entries = source.entry_count(),
        dir = %runs_dir.display(),
        "loaded runs directory"
    );
    Ok(source)
}

fn dataset_key(run_file: &Path) -> Option<String> {
    run_file.parent()?.file_name()?.to_str().map(str::to_string)
}

/// Load a JSON data file or a generated `data.js`
pub fn load_data_file(path: &Path) -> Result<LoadedData> {
    if !path.is_file() {
        return Err(DatasetError::NotFound(path.to_path_buf()).into());
    }
    let content = std::fs::read_to_string(path)?;
    let data = parse_data_str(&content)?;
    tracing::info!(
        datasets = data.source.len(),
        entries = data.source.entry_count(),
        file = %path.display(),
        "loaded data file"
    );
    Ok(data)
}

/// Parse data file content, detecting the `var dataSets = ...` form
pub fn parse_data_str(content: &str) -> Result<LoadedData> {
    let Some(body) = js_var_body(content, DATASETS_VAR) else {
        return Ok(LoadedData { source: datasets_in_order(first_json_value(content)?)?, statements: None });
    };

    let source = datasets_in_order(first_json_value(body)?)?;
    let statements = match js_var_body(content, STATEMENTS_VAR) {
        Some(body) => {
            let map: HashMap<String, String> = first_json_value(body)?;
            Some(QuestionStatements::from_json_map(map))
        }
        None => None,
    };

    Ok(LoadedData { source, statements })
}

/// Decode each dataset of a JSON object, keeping the object's key order
fn datasets_in_order(datasets: Map<String, Value>) -> Result<DatasetSource> {
    let mut source = DatasetSource::new();
    for (key, value) in datasets {
        let entries: Vec<Entry> = serde_json::from_value(value)
            .map_err(|e| DatasetError::InvalidDataFile(format!("dataset {}: {}", key, e)))?;
        source.insert(key, entries);
    }
    Ok(source)
}

/// Text following `var <name> =`, up to the end of the content
fn js_var_body<'a>(content: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("var {}", name);
    content
        .match_indices(&marker)
        .find_map(|(start, _)| content[start + marker.len()..].trim_start().strip_prefix('='))
}

/// Deserialize the first JSON value, ignoring whatever follows it
fn first_json_value<T: DeserializeOwned>(content: &str) -> Result<T> {
    serde_json::Deserializer::from_str(content)
        .into_iter::<T>()
        .next()
        .ok_or_else(|| DatasetError::InvalidDataFile("no JSON value found".to_string()))?
        .map_err(|e| DatasetError::InvalidDataFile(e.to_string()).into())
}
