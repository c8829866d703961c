use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::compliance::domain::{AnalysisResult, CheckCategory, RepositoryReference};
use crate::ports::outbound::{AnalysisFailure, Analyzer};

/// Cache key for one (repository, check selection) pair.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    reference: String,
    checks: Vec<CheckCategory>,
}

impl CacheKey {
    fn new(reference: &RepositoryReference, checks: &BTreeSet<CheckCategory>) -> Self {
        Self {
            reference: reference.as_str().to_string(),
            checks: checks.iter().copied().collect(),
        }
    }
}

/// CachingAnalyzer wraps an Analyzer and adds in-memory result caching.
///
/// The analyzer contract makes results deterministic for an unchanged
/// repository and selection, which is what makes this cache sound:
/// resubmitting the same request within a session returns the identical
/// result without a second analyzer round trip. Failures are not cached,
/// so an explicit user retry reaches the collaborator again.
pub struct CachingAnalyzer<A: Analyzer> {
    inner: A,
    cache: Arc<DashMap<CacheKey, AnalysisResult>>,
}

impl<A: Analyzer> CachingAnalyzer<A> {
    /// Creates a new caching analyzer wrapping the given inner analyzer
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<A: Analyzer + Send + Sync> Analyzer for CachingAnalyzer<A> {
    async fn analyze(
        &self,
        reference: &RepositoryReference,
        selected_checks: &BTreeSet<CheckCategory>,
    ) -> Result<AnalysisResult, AnalysisFailure> {
        let key = CacheKey::new(reference, selected_checks);

        // Check cache first
        if let Some(cached) = self.cache.get(&key) {
            return Ok(cached.clone());
        }

        let result = self.inner.analyze(reference, selected_checks).await?;
        self.cache.insert(key, result.clone());
        Ok(result)
    }
}
