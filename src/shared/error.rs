use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested document was rendered and delivered
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable scan report, serialization or I/O failure)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for BOM finalization and rendering.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Scan report not found: {path}\n\n💡 Hint: Pass the JSON report produced by the scanner with --input")]
    ScanReportNotFound { path: PathBuf },

    #[error("Failed to read scan report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ScanReadError { path: PathBuf, details: String },

    #[error("Failed to parse scan report: {path}\nDetails: {details}\n\n💡 Hint: The report must be the JSON document emitted by the scanner")]
    ScanParseError { path: PathBuf, details: String },

    #[error("Failed to serialize {format} output\nDetails: {details}")]
    SerializationError { format: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl SbomError {
    /// Wraps an encoder failure for the named output format
    pub fn serialization(format: &str, error: impl fmt::Display) -> Self {
        SbomError::SerializationError {
            format: format.to_string(),
            details: error.to_string(),
        }
    }
}
