use crate::compliance::domain::AnalysisResult;
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::ComplyError;
use crate::shared::Result;

/// JsonReportFormatter adapter emitting the complete result as pretty JSON.
///
/// Always renders the full result regardless of any active view filter, so
/// machine consumers see everything the analyzer produced.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, result: &AnalysisResult) -> Result<String> {
        serde_json::to_string_pretty(result).map_err(|e| {
            ComplyError::OutputGenerationError {
                format: "JSON".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
