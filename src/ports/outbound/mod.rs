/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external collaborators (analyzer backend, console,
/// file system, clipboard, timers).
pub mod analyzer;
pub mod clipboard;
pub mod output_presenter;
pub mod preference_store;
pub mod progress_reporter;
pub mod report_formatter;
pub mod scheduler;

pub use analyzer::{AnalysisFailure, Analyzer};
pub use clipboard::Clipboard;
pub use output_presenter::OutputPresenter;
pub use preference_store::{PreferenceStore, DARK_MODE_KEY};
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use scheduler::Scheduler;
