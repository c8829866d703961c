use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::compliance::domain::{AnalysisResult, CheckCategory, RepositoryReference};
use crate::ports::outbound::{AnalysisFailure, Analyzer};
use crate::shared::Result;

/// Request timeout for one analysis round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Wire format of an analysis request sent to the backend.
#[derive(Debug, Serialize)]
struct AnalyzeRequestBody<'a> {
    repository: &'a str,
    checks: &'a BTreeSet<CheckCategory>,
}

/// HttpAnalyzer adapter delegating the analysis to a remote backend.
///
/// Posts the repository reference and the selected check categories as
/// JSON and deserializes the returned result. Transport and backend
/// failures surface as `AnalysisFailure`, never as a partial result.
pub struct HttpAnalyzer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnalyzer {
    /// Creates an analyzer pointing at the given `/analyze` endpoint.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("comply-scan/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Analyzer for HttpAnalyzer {
    async fn analyze(
        &self,
        reference: &RepositoryReference,
        selected_checks: &BTreeSet<CheckCategory>,
    ) -> std::result::Result<AnalysisResult, AnalysisFailure> {
        let body = AnalyzeRequestBody {
            repository: reference.as_str(),
            checks: selected_checks,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisFailure::new(format!("request to analyzer failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AnalysisFailure::new(format!(
                "analyzer returned HTTP {}",
                response.status()
            )));
        }

        let result: AnalysisResult = response
            .json()
            .await
            .map_err(|e| AnalysisFailure::new(format!("invalid analyzer response: {}", e)))?;

        // Deserialization bypasses the builder, so re-check invariants here.
        result
            .validate()
            .map_err(|e| AnalysisFailure::new(format!("inconsistent analyzer response: {}", e)))?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_client() {
        let analyzer = HttpAnalyzer::new("http://localhost:8000/analyze");
        assert!(analyzer.is_ok());
    }

    #[test]
    fn test_request_body_wire_format() {
        let checks: BTreeSet<CheckCategory> = [CheckCategory::Rgpd, CheckCategory::Pii]
            .into_iter()
            .collect();
        let body = AnalyzeRequestBody {
            repository: "https://github.com/acme/widgets",
            checks: &checks,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["repository"], "https://github.com/acme/widgets");
        let ids: Vec<&str> = json["checks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["rgpd", "pii"]);
    }
}
