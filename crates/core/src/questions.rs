use crate::entry::display_value;
use crate::error::{DatasetError, Result};

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Question statements keyed by question id
///
/// Ids are compared by their display text, so `7` and `"7"` name the same
/// question. This matches how the ids end up as object keys in generated
/// data files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionStatements {
    statements: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question_number: Value,
    statement: String,
}

impl QuestionStatements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question: &Value, statement: impl Into<String>) {
        self.statements.insert(display_value(question), statement.into());
    }

    /// Statement for an entry's question id
    pub fn statement_for(&self, question: &Value) -> Option<&str> {
        self.statements.get(&display_value(question)).map(String::as_str)
    }

    /// Statement by display key, as used by [`crate::stats::ResponseCounts`]
    pub fn statement_for_key(&self, key: &str) -> Option<&str> {
        self.statements.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Parse a `questions.jsonl` body (one `{question_number, statement}` object per line)
    pub fn from_jsonl_str(content: &str, path: &Path) -> Result<Self> {
        let mut statements = Self::new();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: QuestionRecord = serde_json::from_str(line).map_err(|e| DatasetError::InvalidEntry {
                path: path.to_path_buf(),
                line: idx + 1,
                reason: e.to_string(),
            })?;
            statements.insert(&record.question_number, record.statement);
        }
        Ok(statements)
    }

    /// Load a `questions.jsonl` file
    pub fn from_jsonl_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.to_path_buf()).into());
        }
        let content = std::fs::read_to_string(path)?;
        let statements = Self::from_jsonl_str(&content, path)?;
        tracing::info!(count = statements.len(), path = %path.display(), "loaded question statements");
        Ok(statements)
    }

    /// Build from a JSON object mapping question id to statement
    pub fn from_json_map(map: HashMap<String, String>) -> Self {
        Self { statements: map }
    }
}
