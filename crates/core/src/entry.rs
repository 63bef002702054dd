use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One recorded prompt/response exchange
///
/// Accepts both record layouts written by the question runner: the legacy
/// capitalized keys (`Prompt`, `Question_idx`, ...) and the current snake-case
/// keys (`prompt`, `question_number`, `persona`, ...). Missing fields default
/// rather than failing, since entries are only read for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, alias = "Prompt")]
    pub prompt: String,

    #[serde(default, alias = "Response")]
    pub response: String,

    /// Opaque id of the source question (number or string)
    #[serde(default, rename = "question_idx", alias = "Question_idx", alias = "question_number")]
    pub question_index: Value,

    /// Opaque id of the persona that produced the prompt
    #[serde(default, rename = "persona_idx", alias = "Persona_idx", alias = "persona")]
    pub persona_index: Value,

    /// Normalized form of `response`, shown verbatim
    #[serde(default, alias = "Response_Parsed")]
    pub response_parsed: Value,
}

impl Entry {
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), response: response.into(), ..Self::default() }
    }

    pub fn with_question(mut self, question_index: impl Into<Value>) -> Self {
        self.question_index = question_index.into();
        self
    }

    pub fn with_persona(mut self, persona_index: impl Into<Value>) -> Self {
        self.persona_index = persona_index.into();
        self
    }

    pub fn with_parsed(mut self, response_parsed: impl Into<Value>) -> Self {
        self.response_parsed = response_parsed.into();
        self
    }

    /// Prompt split on embedded newlines, one item per rendered line
    pub fn prompt_lines(&self) -> Vec<String> {
        split_lines(&self.prompt)
    }

    /// Response split on embedded newlines, one item per rendered line
    pub fn response_lines(&self) -> Vec<String> {
        split_lines(&self.response)
    }
}

/// Every `\n` becomes a line break, including leading and trailing ones.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Render an opaque value for display
///
/// Strings are shown without quotes, `null` as `n/a`, everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "n/a".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
