use std::collections::BTreeSet;

use async_trait::async_trait;
use thiserror::Error;

use crate::compliance::domain::{AnalysisResult, CheckCategory, RepositoryReference};

/// Failure reported by an analyzer collaborator (network, clone, timeout).
#[derive(Debug, Clone, Error)]
#[error("{reason}")]
pub struct AnalysisFailure {
    pub reason: String,
}

impl AnalysisFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Analyzer port - the external collaborator that produces findings.
///
/// The engine treats the returned result as the sole source of truth for
/// all scores and finding lists. The collaborator's contract is
/// determinism: analyzing an unchanged repository with an unchanged check
/// selection must yield identical scores and identical risk/action/service
/// lists (report metadata excluded).
#[async_trait]
pub trait Analyzer {
    /// Analyzes the repository for the selected check categories.
    ///
    /// # Errors
    /// Returns `AnalysisFailure` on network/clone/timeout errors; callers
    /// map this back to an idle lifecycle, never to a partial result.
    async fn analyze(
        &self,
        reference: &RepositoryReference,
        selected_checks: &BTreeSet<CheckCategory>,
    ) -> Result<AnalysisResult, AnalysisFailure>;
}
