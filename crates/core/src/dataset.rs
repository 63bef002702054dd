use crate::entry::Entry;

use std::sync::Arc;

/// Ordered, immutable sequence of entries
///
/// Clones share the underlying entries, so handing a dataset to the browser
/// never copies entry content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entries: Arc<[Entry]>,
}

impl Dataset {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries: entries.into() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Whether two handles point at the same loaded sequence
    pub fn shares_entries(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl From<Vec<Entry>> for Dataset {
    fn from(entries: Vec<Entry>) -> Self {
        Self::new(entries)
    }
}

/// Mapping from dataset key to dataset, in meaningful key order
///
/// Key order is the order keys were first inserted; it drives the order of
/// the dataset selector. Re-inserting an existing key replaces its dataset in
/// place.
#[derive(Debug, Clone, Default)]
pub struct DatasetSource {
    datasets: Vec<(String, Dataset)>,
}

impl DatasetSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dataset, returning the previous one stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, dataset: impl Into<Dataset>) -> Option<Dataset> {
        let key = key.into();
        let dataset = dataset.into();
        match self.datasets.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, dataset)),
            None => {
                self.datasets.push((key, dataset));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|(existing, _)| existing == key).map(|(_, dataset)| dataset)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in selector order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.datasets.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dataset)> {
        self.datasets.iter().map(|(key, dataset)| (key.as_str(), dataset))
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Total number of entries across all datasets
    pub fn entry_count(&self) -> usize {
        self.datasets.iter().map(|(_, dataset)| dataset.len()).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<Entry>)> for DatasetSource {
    fn from_iter<I: IntoIterator<Item = (K, Vec<Entry>)>>(iter: I) -> Self {
        let mut source = DatasetSource::new();
        for (key, entries) in iter {
            source.insert(key, entries);
        }
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<Entry> {
        (0..n).map(|i| Entry::new(format!("prompt {}", i), format!("response {}", i))).collect()
    }

    #[test]
    fn test_dataset_preserves_order() {
        let dataset = Dataset::new(entries(3));
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.get(0).unwrap().prompt, "prompt 0");
        assert_eq!(dataset.get(2).unwrap().prompt, "prompt 2");
        assert!(dataset.get(3).is_none());
    }

    #[test]
    fn test_dataset_clone_shares_entries() {
        let dataset = Dataset::new(entries(2));
        let clone = dataset.clone();
        assert!(dataset.shares_entries(&clone));
        assert!(!dataset.shares_entries(&Dataset::new(entries(2))));
    }

    #[test]
    fn test_source_keeps_insertion_order() {
        let source: DatasetSource = vec![("run_b", entries(1)), ("run_a", entries(2)), ("run_c", entries(0))]
            .into_iter()
            .collect();

        assert_eq!(source.keys().collect::<Vec<_>>(), vec!["run_b", "run_a", "run_c"]);
        assert_eq!(source.len(), 3);
        assert_eq!(source.entry_count(), 3);
    }

    #[test]
    fn test_source_insert_replaces_in_place() {
        let mut source = DatasetSource::new();
        assert!(source.insert("a", entries(1)).is_none());
        source.insert("b", entries(1));

        let previous = source.insert("a", entries(4));
        assert_eq!(previous.map(|d| d.len()), Some(1));
        assert_eq!(source.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(source.get("a").unwrap().len(), 4);
    }

    #[test]
    fn test_source_lookup() {
        let source: DatasetSource = vec![("only", entries(1))].into_iter().collect();
        assert!(source.contains_key("only"));
        assert!(!source.contains_key("other"));
        assert!(source.get("other").is_none());
        assert!(DatasetSource::new().is_empty());
    }
}
