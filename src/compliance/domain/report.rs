use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::compliance::domain::{
    Action, CategoryScores, PiiFinding, RepositoryReference, Risk, Score, ServiceFlow,
};
use crate::shared::error::ComplyError;
use crate::shared::Result;

/// One free-text compliance dimension with its own score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceBreakdownEntry {
    pub category: String,
    pub score: Score,
}

/// Report metadata (timestamp, tool info, serial number).
///
/// Not part of the analyzer's determinism contract: two runs over the same
/// repository yield identical findings but fresh metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    generated_at: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
    serial_number: String,
}

impl ReportMetadata {
    pub fn new(
        generated_at: DateTime<Utc>,
        tool_name: String,
        tool_version: String,
        serial_number: String,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            serial_number,
        }
    }

    /// Generates fresh metadata stamped with the current time.
    pub fn generate() -> Self {
        Self {
            generated_at: Utc::now(),
            tool_name: "comply-scan".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            serial_number: format!("urn:uuid:{}", Uuid::new_v4()),
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}

/// The complete outcome of one compliance analysis.
///
/// Produced once per completed analysis and immutable afterwards; the
/// engine only reads it (counts, filters, classification) and never
/// re-derives or mutates the scores it carries. The overall score, the
/// category scores and the breakdown scores are independent inputs owned
/// by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    repository_reference: RepositoryReference,
    overall_score: Score,
    category_scores: CategoryScores,
    pii_findings: Vec<PiiFinding>,
    risks: Vec<Risk>,
    actions: Vec<Action>,
    service_flows: Vec<ServiceFlow>,
    compliance_breakdown: Vec<ComplianceBreakdownEntry>,
    metadata: ReportMetadata,
}

impl AnalysisResult {
    /// Starts building a result from its required parts.
    pub fn builder(
        repository_reference: RepositoryReference,
        overall_score: Score,
        category_scores: CategoryScores,
    ) -> AnalysisResultBuilder {
        AnalysisResultBuilder {
            repository_reference,
            overall_score,
            category_scores,
            pii_findings: Vec::new(),
            risks: Vec::new(),
            actions: Vec::new(),
            service_flows: Vec::new(),
            compliance_breakdown: Vec::new(),
            metadata: None,
        }
    }

    pub fn repository_reference(&self) -> &RepositoryReference {
        &self.repository_reference
    }

    pub fn overall_score(&self) -> Score {
        self.overall_score
    }

    pub fn category_scores(&self) -> &CategoryScores {
        &self.category_scores
    }

    pub fn pii_findings(&self) -> &[PiiFinding] {
        &self.pii_findings
    }

    pub fn risks(&self) -> &[Risk] {
        &self.risks
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn service_flows(&self) -> &[ServiceFlow] {
        &self.service_flows
    }

    pub fn compliance_breakdown(&self) -> &[ComplianceBreakdownEntry] {
        &self.compliance_breakdown
    }

    pub fn metadata(&self) -> &ReportMetadata {
        &self.metadata
    }

    /// Checks the structural invariants of a result: risk and action ids
    /// must be unique within it.
    ///
    /// The builder runs this automatically; results obtained from external
    /// transports (deserialized JSON) should be validated explicitly.
    pub fn validate(&self) -> Result<()> {
        Self::check_unique_ids("risk", self.risks.iter().map(|r| r.id.as_str()))?;
        Self::check_unique_ids("action", self.actions.iter().map(|a| a.id.as_str()))?;
        Ok(())
    }

    fn check_unique_ids<'a>(
        kind: &str,
        ids: impl Iterator<Item = &'a str>,
    ) -> Result<()> {
        let mut seen = std::collections::BTreeSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(ComplyError::Validation {
                    message: format!("Duplicate {} id within a result: {}", kind, id),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Step-by-step constructor for `AnalysisResult`.
pub struct AnalysisResultBuilder {
    repository_reference: RepositoryReference,
    overall_score: Score,
    category_scores: CategoryScores,
    pii_findings: Vec<PiiFinding>,
    risks: Vec<Risk>,
    actions: Vec<Action>,
    service_flows: Vec<ServiceFlow>,
    compliance_breakdown: Vec<ComplianceBreakdownEntry>,
    metadata: Option<ReportMetadata>,
}

impl AnalysisResultBuilder {
    pub fn pii_finding(mut self, category: impl Into<String>, occurrence_count: u32) -> Self {
        self.pii_findings.push(PiiFinding {
            category: category.into(),
            occurrence_count,
        });
        self
    }

    pub fn risk(mut self, risk: Risk) -> Self {
        self.risks.push(risk);
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    pub fn service_flow(mut self, flow: ServiceFlow) -> Self {
        self.service_flows.push(flow);
        self
    }

    pub fn breakdown_entry(mut self, category: impl Into<String>, score: Score) -> Self {
        self.compliance_breakdown.push(ComplianceBreakdownEntry {
            category: category.into(),
            score,
        });
        self
    }

    pub fn metadata(mut self, metadata: ReportMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Finalizes the result, verifying id uniqueness.
    pub fn build(self) -> Result<AnalysisResult> {
        let result = AnalysisResult {
            repository_reference: self.repository_reference,
            overall_score: self.overall_score,
            category_scores: self.category_scores,
            pii_findings: self.pii_findings,
            risks: self.risks,
            actions: self.actions,
            service_flows: self.service_flows,
            compliance_breakdown: self.compliance_breakdown,
            metadata: self.metadata.unwrap_or_else(ReportMetadata::generate),
        };
        result.validate()?;
        Ok(result)
    }
}
