use crate::compliance::domain::AnalysisResult;
use crate::shared::Result;

/// ReportFormatter port for rendering an analysis result.
///
/// Implementations turn the immutable result into one output document
/// (JSON, Markdown, ...); they read the result and never modify it.
pub trait ReportFormatter {
    /// Formats the result into the target document format.
    ///
    /// # Errors
    /// Returns an error when serialization fails.
    fn format(&self, result: &AnalysisResult) -> Result<String>;
}
