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
    /// Success - version resolved or BOM accepted by the server
    Success = 0,
    /// The inventory server received the BOM but rejected it (non-200 status)
    UploadRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, network error, config error, etc.)
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
            ExitCode::UploadRejected => write!(f, "Upload Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for version resolution and BOM upload.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum BomshipError {
    #[error("Version properties file not found: {path}\n\n💡 Hint: create buildprocess/version.properties or pass --properties, or use --lenient to continue with an empty record")]
    PropertiesNotFound { path: PathBuf },

    #[error("Failed to read version properties file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    PropertiesRead { path: PathBuf, details: String },

    #[error("Failed to read BOM file: {path}\nDetails: {details}\n\n💡 Hint: run your SBOM generator first so the BOM file exists before uploading")]
    BomRead { path: PathBuf, details: String },

    #[error("BOM upload rejected with status {status}, body: {body}")]
    RemoteRejected { status: u16, body: String },

    #[error("BOM upload failed: {details}\n\n💡 Hint: check the server URI and network connectivity; for self-signed internal endpoints consider --trust-all")]
    Transport { details: String },

    #[error("Failed to write version record: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    RecordWrite { path: PathBuf, details: String },
}
