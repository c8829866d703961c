//! comply-scan - RGPD / AI Act compliance assessment for code repositories
//!
//! This library validates a repository reference and a check selection,
//! drives the analysis lifecycle as a state machine, and turns the raw
//! findings handed back by an analyzer collaborator into consistent,
//! orderable, filterable compliance metrics (scores, labels, priorities).
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): value objects, classification
//!   policies and the lifecycle/aggregation services
//! - **Application Layer** (`application`): use cases, DTOs, the session
//!   context and factories
//! - **Ports** (`ports`): interface definitions for collaborators
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use comply_scan::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let analyzer = DemoAnalyzer::new();
//! let scheduler = TokioScheduler::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = RunAnalysisUseCase::new(analyzer, scheduler, progress_reporter);
//!
//! // Execute
//! let mut lifecycle = AnalysisLifecycle::new();
//! let request = AnalysisRequest::new(
//!     "https://github.com/acme/widgets",
//!     CheckSelection::defaults(),
//! );
//! let submission = use_case.execute(&mut lifecycle, request).await?;
//!
//! // Format output
//! if let Submission::Completed(response) = submission {
//!     let formatter = MarkdownReportFormatter::new();
//!     let report = formatter.format(&response.result)?;
//!     println!("{}", report);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod compliance;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::demo::DemoAnalyzer;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemPreferenceStore, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonReportFormatter, MarkdownReportFormatter,
    };
    pub use crate::adapters::outbound::network::{CachingAnalyzer, HttpAnalyzer};
    pub use crate::adapters::outbound::runtime::TokioScheduler;
    pub use crate::adapters::outbound::MemoryClipboard;
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, OutputFormat};
    pub use crate::application::use_cases::{RunAnalysisUseCase, Submission};
    pub use crate::application::Session;
    pub use crate::compliance::domain::{
        Action, ActionType, AnalysisResult, CategoryScores, CheckCategory, CheckSelection,
        PiiFinding, Priority, RepositoryReference, Risk, RiskLevel, Score, ServiceFlow,
        ServiceStatus, SourceLocation,
    };
    pub use crate::compliance::policies::ComplianceTier;
    pub use crate::compliance::services::{
        AnalysisLifecycle, AnalysisPhase, ExpansionState, RiskAggregator, RiskCounts, RiskFilter,
    };
    pub use crate::ports::outbound::{
        AnalysisFailure, Analyzer, Clipboard, OutputPresenter, PreferenceStore,
        ProgressReporter, ReportFormatter, Scheduler, DARK_MODE_KEY,
    };
    pub use crate::shared::{ComplyError, ExitCode, Result};
}
