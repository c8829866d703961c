/// Domain value objects of the compliance assessment engine.
pub mod action;
pub mod check_category;
pub mod pii;
pub mod report;
pub mod repository_reference;
pub mod risk;
pub mod score;
pub mod service_flow;

pub use action::{Action, ActionType};
pub use check_category::{CheckCategory, CheckSelection};
pub use pii::PiiFinding;
pub use report::{AnalysisResult, AnalysisResultBuilder, ComplianceBreakdownEntry, ReportMetadata};
pub use repository_reference::RepositoryReference;
pub use risk::{Priority, Risk, RiskLevel, SourceLocation};
pub use score::{CategoryScores, Score, MAX_SCORE};
pub use service_flow::{ServiceFlow, ServiceStatus};
