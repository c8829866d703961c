use serde::{Deserialize, Serialize};

/// One category of personal data detected in the repository, with the
/// number of occurrences found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiiFinding {
    /// Free-text label, e.g. "email" or "IP address".
    pub category: String,
    pub occurrence_count: u32,
}

impl PiiFinding {
    pub fn new(category: impl Into<String>, occurrence_count: u32) -> Self {
        Self {
            category: category.into(),
            occurrence_count,
        }
    }
}

impl std::fmt::Display for PiiFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}×)", self.category, self.occurrence_count)
    }
}
