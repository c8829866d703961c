use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use comply_scan::prelude::*;

/// Mock Analyzer recording every invocation and returning a fixed outcome.
#[derive(Clone)]
pub struct MockAnalyzer {
    invocations: Arc<Mutex<Vec<(String, BTreeSet<CheckCategory>)>>>,
    failure: Option<String>,
}

impl MockAnalyzer {
    /// Succeeds with a small fixture result echoing the analyzed reference.
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// Fails every analysis with the given reason.
    pub fn with_failure(reason: &str) -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            failure: Some(reason.to_string()),
        }
    }

    pub fn invocations(&self) -> Vec<(String, BTreeSet<CheckCategory>)> {
        self.invocations.lock().unwrap().clone()
    }
}

impl Default for MockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Analyzer for MockAnalyzer {
    async fn analyze(
        &self,
        reference: &RepositoryReference,
        selected_checks: &BTreeSet<CheckCategory>,
    ) -> std::result::Result<AnalysisResult, AnalysisFailure> {
        self.invocations
            .lock()
            .unwrap()
            .push((reference.as_str().to_string(), selected_checks.clone()));
        if let Some(reason) = &self.failure {
            return Err(AnalysisFailure::new(reason.clone()));
        }
        let result = AnalysisResult::builder(
            reference.clone(),
            Score::new(67).unwrap(),
            CategoryScores {
                rgpd: Score::new(62).unwrap(),
                ai_act: Score::new(71).unwrap(),
                security: Score::new(58).unwrap(),
                documentation: Score::new(75).unwrap(),
            },
        )
        .pii_finding("email", 23)
        .risk(Risk {
            id: "1".to_string(),
            level: RiskLevel::Critical,
            title: "Clé API hardcodée".to_string(),
            description: "Une clé secrète est présente dans le code source.".to_string(),
            source: SourceLocation::with_line("src/config/payment.ts", 8),
            legal_reference: Some("Article 32 - Sécurité du traitement".to_string()),
            priority: Priority::P0,
        })
        .build()
        .expect("fixture result must be valid");
        Ok(result)
    }
}
