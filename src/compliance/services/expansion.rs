use std::collections::BTreeSet;

/// The set of risk ids currently expanded in the report view.
///
/// Owned by the session and fully independent of the active risk filter:
/// filtering selects what is visible, never what is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set-complement on one id: expands it when collapsed, collapses it
    /// when expanded.
    pub fn toggle(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}
