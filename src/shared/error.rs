use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis completed and the score meets the threshold
    Success = 0,
    /// The overall compliance score is below the configured threshold
    NonCompliant = 1,
    /// Invalid input (clap parsing errors, invalid reference, empty selection)
    InvalidArguments = 2,
    /// Application error (analyzer error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NonCompliant => write!(f, "Non Compliant (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for compliance assessment.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ComplyError {
    #[error("Invalid repository reference: {input}\n\n💡 Hint: expected a GitHub repository URL such as https://github.com/org/repo")]
    InvalidRepositoryReference { input: String },

    #[error("No analysis category selected\n\n💡 Hint: select at least one category, e.g. --check rgpd")]
    EmptyCheckSelection,

    #[error("Analysis failed: {reason}\n\n💡 Hint: verify that the repository is reachable, then submit the analysis again")]
    AnalysisFailed { reason: String },

    #[error("Failed to generate {format} output\nDetails: {details}")]
    OutputGenerationError { format: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to access the preference store: {path}\nDetails: {details}")]
    PreferenceStoreError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl ComplyError {
    /// Maps the error to the exit code the CLI should terminate with.
    ///
    /// Input-shaped errors (bad reference, empty selection) are reported as
    /// invalid arguments so CI pipelines can tell them apart from runtime
    /// failures.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ComplyError::InvalidRepositoryReference { .. } | ComplyError::EmptyCheckSelection => {
                ExitCode::InvalidArguments
            }
            ComplyError::AnalysisFailed { .. }
            | ComplyError::OutputGenerationError { .. }
            | ComplyError::FileWriteError { .. }
            | ComplyError::PreferenceStoreError { .. }
            | ComplyError::Validation { .. } => ExitCode::ApplicationError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::NonCompliant.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(format!("{}", ExitCode::NonCompliant), "Non Compliant (1)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_reference_display() {
        let error = ComplyError::InvalidRepositoryReference {
            input: "https://gitlab.com/acme/widgets".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid repository reference"));
        assert!(display.contains("https://gitlab.com/acme/widgets"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_empty_selection_display() {
        let display = format!("{}", ComplyError::EmptyCheckSelection);
        assert!(display.contains("No analysis category selected"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_analysis_failed_display() {
        let error = ComplyError::AnalysisFailed {
            reason: "clone timed out".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Analysis failed"));
        assert!(display.contains("clone timed out"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = ComplyError::FileWriteError {
            path: PathBuf::from("/test/report.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/report.json"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_validation_errors_map_to_invalid_arguments() {
        let error = ComplyError::InvalidRepositoryReference {
            input: "nope".to_string(),
        };
        assert_eq!(error.exit_code(), ExitCode::InvalidArguments);
        assert_eq!(
            ComplyError::EmptyCheckSelection.exit_code(),
            ExitCode::InvalidArguments
        );
    }

    #[test]
    fn test_runtime_errors_map_to_application_error() {
        let error = ComplyError::AnalysisFailed {
            reason: "network".to_string(),
        };
        assert_eq!(error.exit_code(), ExitCode::ApplicationError);
    }
}
