use crate::dataset::Dataset;
use crate::entry::display_value;

use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Per-question tally of parsed responses for one dataset
///
/// Questions and responses are keyed by display text. Numeric question ids
/// iterate by value, other ids after them by text; responses iterate by text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseCounts {
    counts: BTreeMap<QuestionKey, BTreeMap<String, usize>>,
}

/// Question id display text, ordered numerically when it is an integer
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuestionKey(String);

impl QuestionKey {
    fn number(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl Ord for QuestionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number(), other.number()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for QuestionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distribution of parsed responses for a single question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionTally<'a> {
    pub question: &'a str,
    pub responses: Vec<(&'a str, usize)>,
}

impl QuestionTally<'_> {
    pub fn total(&self) -> usize {
        self.responses.iter().map(|(_, count)| count).sum()
    }

    /// Most frequent response; ties go to the first in sorted order
    pub fn mode(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for &(response, count) in &self.responses {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((response, count));
            }
        }
        best.map(|(response, _)| response)
    }
}

impl ResponseCounts {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut counts: BTreeMap<QuestionKey, BTreeMap<String, usize>> = BTreeMap::new();
        for entry in dataset.iter() {
            *counts
                .entry(QuestionKey(display_value(&entry.question_index)))
                .or_default()
                .entry(display_value(&entry.response_parsed))
                .or_default() += 1;
        }
        Self { counts }
    }

    pub fn question_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count of `response` for `question`, zero when never seen
    pub fn count(&self, question: &str, response: &str) -> usize {
        self.counts.get(&QuestionKey(question.to_string())).and_then(|responses| responses.get(response)).copied().unwrap_or(0)
    }

    pub fn tallies(&self) -> impl Iterator<Item = QuestionTally<'_>> {
        self.counts.iter().map(|(question, responses)| QuestionTally {
            question: question.0.as_str(),
            responses: responses.iter().map(|(response, count)| (response.as_str(), *count)).collect(),
        })
    }

    /// Sum over all questions
    pub fn total(&self) -> usize {
        self.counts.values().flat_map(|responses| responses.values()).sum()
    }
}
