//! Error types for packagerbuddy-core

use std::path::Path;
use thiserror::Error;

/// Result type alias using packagerbuddy-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for PackagerBuddy
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid user input (software name, version, URL template)
    #[error("{message}")]
    Validation { message: String },

    /// Software has no entry in the software config
    #[error("software {software:?} is not configured")]
    NotConfigured { software: String },

    /// Network or transport failure while fetching an archive
    #[error("failed to download {url}: {message}")]
    Download { url: String, message: String },

    /// Archive extension has no registered extraction handler
    #[error("unsupported archive format: {path}")]
    UnsupportedFormat { path: String },

    /// Archive contents could not be read
    #[error("failed to read archive {path}: {message}")]
    Archive { path: String, message: String },

    /// Post-install script exited unsuccessfully
    #[error("script {script} failed with exit code {code}: {stderr}")]
    Script {
        script: String,
        code: i32,
        stderr: String,
    },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Invalid glob pattern
    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not configured error
    pub fn not_configured(software: impl Into<String>) -> Self {
        Self::NotConfigured {
            software: software.into(),
        }
    }

    /// Create a download error
    pub fn download(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Download {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: &Path) -> Self {
        Self::UnsupportedFormat {
            path: path.display().to_string(),
        }
    }

    /// Create an archive read error
    pub fn archive(path: &Path, message: impl Into<String>) -> Self {
        Self::Archive {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create a script failure error
    pub fn script(script: &Path, code: i32, stderr: impl Into<String>) -> Self {
        Self::Script {
            script: script.display().to_string(),
            code,
            stderr: stderr.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_configured_message() {
        let err = Error::not_configured("foo");
        assert_eq!(err.to_string(), "software \"foo\" is not configured");
    }

    #[test]
    fn test_download_message() {
        let err = Error::download("http://host/1.0/foo.zip", "status 404");
        assert_eq!(
            err.to_string(),
            "failed to download http://host/1.0/foo.zip: status 404"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
