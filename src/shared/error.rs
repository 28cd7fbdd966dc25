use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI systems can use these to tell a non-compliant BOM apart from a
/// crashed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// `validate` found FDA compliance issues
    ComplianceFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing path, unsupported format, I/O error, etc.)
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
            ExitCode::ComplianceFailed => write!(f, "Compliance Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for BOM generation and export.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Project path not found: {path}\n\n💡 Hint: Please specify an existing project or solution directory")]
    ProjectNotFound { path: PathBuf },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Nothing to {operation}: no input BOMs were provided\n\n💡 Hint: Make sure at least one project was scanned successfully")]
    EmptyInput { operation: String },

    #[error("Unsupported format: {format}\n\n💡 Hint: Supported formats are spdx, cyclonedx, swid and json")]
    UnsupportedFormat { format: String },

    /// A mandatory BOM field is missing or malformed
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Output directory does not exist: {path}\n\n💡 Hint: Create the directory first or choose another output path")]
    OutputDirectoryNotFound { path: PathBuf },

    #[error("Failed to parse manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is well-formed")]
    ManifestParse { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
