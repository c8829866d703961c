/// Application-layer data transfer objects.
pub mod analysis_request;
pub mod analysis_response;
pub mod output_format;

pub use analysis_request::AnalysisRequest;
pub use analysis_response::AnalysisResponse;
pub use output_format::OutputFormat;
