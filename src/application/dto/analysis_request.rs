use crate::compliance::domain::{CheckSelection, RepositoryReference, Score};

/// AnalysisRequest - Internal request DTO for the analysis use case
///
/// Carries the raw user input; the reference is validated when the use
/// case executes, so a rejected submission leaves the caller's input
/// available for correction and retry.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Repository locator as typed by the user
    pub repository_reference: String,
    /// Requested check categories (must have at least one selected)
    pub selection: CheckSelection,
    /// Overall score below which the run is reported as non-compliant
    pub fail_under: Option<Score>,
}

impl AnalysisRequest {
    pub fn new(repository_reference: impl Into<String>, selection: CheckSelection) -> Self {
        Self {
            repository_reference: repository_reference.into(),
            selection,
            fail_under: None,
        }
    }

    pub fn with_fail_under(mut self, threshold: Score) -> Self {
        self.fail_under = Some(threshold);
        self
    }

    /// Whether the submit gate is open: the reference is syntactically
    /// valid and at least one category is selected.
    pub fn is_submittable(&self) -> bool {
        RepositoryReference::is_valid(&self.repository_reference)
            && self.selection.has_any_selected()
    }
}
