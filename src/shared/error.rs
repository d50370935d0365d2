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
    /// Success - graph resolved (and, if requested, the reference count matched)
    Success = 0,
    /// The reference tool reported a different node count than the resolver
    CountMismatch = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
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
            ExitCode::CountMismatch => write!(f, "Count Mismatch (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for graph resolution.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("Snapshot file not found: {path}\n\n💡 Hint: {suggestion}")]
    SnapshotNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse snapshot file: {path}\nDetails: {details}\n\n💡 Hint: A snapshot is a JSON object mapping \"name@version\" keys to arrays of dependency names")]
    SnapshotParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid package spec: {spec}\nReason: {reason}\n\n💡 Hint: Use NAME or NAME@VERSION, e.g. \"serde\" or \"serde@1.0.200\"")]
    InvalidPackageSpec { spec: String, reason: String },
}
