//! Error types for flutterup operations.
//!
//! This module defines [`InstallError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Download failures carry a typed cause (`Network`, `HttpStatus`,
//!   `Filesystem`) so callers and tests can discriminate instead of
//!   matching on message text
//! - Use `anyhow::Error` (via `InstallError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for flutterup operations.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Network-level failure: DNS, connect, TLS, timeout, or a transfer
    /// broken mid-body.
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// Server answered with a non-success HTTP status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// Failed to create or write the destination file.
    #[error("Failed to write {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for flutterup operations.
pub type Result<T> = std::result::Result<T, InstallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_error_displays_url_and_message() {
        let err = InstallError::Network {
            url: "https://example.com/sdk.zip".into(),
            message: "connection refused".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/sdk.zip"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn http_status_error_displays_status_and_url() {
        let err = InstallError::HttpStatus {
            status: 404,
            url: "https://example.com/sdk.zip".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("https://example.com/sdk.zip"));
    }

    #[test]
    fn filesystem_error_displays_path_and_cause() {
        let err = InstallError::Filesystem {
            path: PathBuf::from("/no/such/dir/sdk.zip"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing parent"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/dir/sdk.zip"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: InstallError = io_err.into();
        assert!(matches!(err, InstallError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(InstallError::Network {
                url: "https://example.com".into(),
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
