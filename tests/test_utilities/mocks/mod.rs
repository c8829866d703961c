/// Mock implementations for testing
mod mock_analyzer;
mod mock_preference_store;
mod mock_progress_reporter;
mod mock_scheduler;

pub use mock_analyzer::MockAnalyzer;
pub use mock_preference_store::MockPreferenceStore;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_scheduler::InstantScheduler;
