/// Dataset selector control
///
/// Holds one option per dataset key (label and value are both the key) and
/// the currently chosen option. Like a list control, a freshly populated
/// selector defaults to its first option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetSelector {
    options: Vec<String>,
    selected: Option<usize>,
}

impl DatasetSelector {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = keys.into_iter().map(Into::into).collect();
        let selected = if options.is_empty() { None } else { Some(0) };
        Self { options, selected }
    }

    /// Value of the chosen option, if any
    pub fn value(&self) -> Option<&str> {
        self.selected.and_then(|idx| self.options.get(idx)).map(String::as_str)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Choose the option whose value is `key`; returns false when absent
    pub fn choose(&mut self, key: &str) -> bool {
        match self.options.iter().position(|option| option == key) {
            Some(idx) => {
                self.selected = Some(idx);
                true
            }
            None => false,
        }
    }

    /// Move to the next option, wrapping to the first
    pub fn choose_next(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some((idx + 1) % self.options.len());
        }
    }

    /// Move to the previous option, wrapping to the last
    pub fn choose_prev(&mut self) {
        if let Some(idx) = self.selected {
            let len = self.options.len();
            self.selected = Some((idx + len - 1) % len);
        }
    }
}
