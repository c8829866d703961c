/// Application use cases.
pub mod run_analysis;

pub use run_analysis::{RunAnalysisUseCase, Submission};
