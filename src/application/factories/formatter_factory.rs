use crate::adapters::outbound::formatters::{JsonReportFormatter, MarkdownReportFormatter};
use crate::application::dto::OutputFormat;
use crate::compliance::services::RiskFilter;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter
/// implementations, following the Factory Pattern. It belongs in the
/// application layer as it orchestrates the selection of infrastructure
/// adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `risk_filter` - Which risks the rendered report should show; the
    ///   JSON formatter always emits the complete result
    ///
    /// # Returns
    /// A boxed ReportFormatter trait object appropriate for the format
    pub fn create(format: OutputFormat, risk_filter: RiskFilter) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
            OutputFormat::Markdown => {
                Box::new(MarkdownReportFormatter::new().with_risk_filter(risk_filter))
            }
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating JSON report...",
            OutputFormat::Markdown => "📝 Generating Markdown report...",
        }
    }
}
