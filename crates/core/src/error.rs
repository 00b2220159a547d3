//! Error types for installer operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for installer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching and installing Terragrunt.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The download step produced no local file.
    #[error("Unable to download Terragrunt from {url}")]
    #[diagnostic(
        code(setup_terragrunt::download_failure),
        help("Check that the release exists for this version and platform")
    )]
    DownloadFailure {
        /// The release URL that was requested.
        url: String,
    },

    /// The extraction step produced no output directory.
    #[error("Unable to extract Terragrunt archive {}", .archive.display())]
    #[diagnostic(code(setup_terragrunt::extraction_failure))]
    ExtractionFailure {
        /// The archive that was handed to the extractor.
        archive: PathBuf,
    },

    /// The HTTP request could not be completed.
    #[error("Request to {url} failed: {source}")]
    #[diagnostic(code(setup_terragrunt::network))]
    Network {
        /// The requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    #[diagnostic(code(setup_terragrunt::http_client))]
    HttpClient {
        /// Underlying client builder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a non-success status.
    #[error("Request to {url} failed with HTTP {status}")]
    #[diagnostic(code(setup_terragrunt::http_status))]
    HttpStatus {
        /// The requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The archive could not be read.
    #[error("Invalid archive {}: {message}", .archive.display())]
    #[diagnostic(code(setup_terragrunt::archive))]
    Archive {
        /// Path of the archive.
        archive: PathBuf,
        /// Error message.
        message: String,
    },

    /// The executable search path could not be updated.
    #[error("Cannot update search path: {0}")]
    #[diagnostic(code(setup_terragrunt::search_path))]
    SearchPath(String),

    /// IO error.
    #[error("IO error: {0}")]
    #[diagnostic(code(setup_terragrunt::io))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a download failure error.
    #[must_use]
    pub fn download_failure(url: impl Into<String>) -> Self {
        Self::DownloadFailure { url: url.into() }
    }

    /// Create an extraction failure error.
    #[must_use]
    pub fn extraction_failure(archive: impl Into<PathBuf>) -> Self {
        Self::ExtractionFailure {
            archive: archive.into(),
        }
    }

    /// Create a network error wrapping the transport's own error.
    #[must_use]
    pub fn network(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Create an HTTP client construction error.
    #[must_use]
    pub fn http_client(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::HttpClient {
            source: Box::new(source),
        }
    }

    /// Create an HTTP status error.
    #[must_use]
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create an archive error.
    #[must_use]
    pub fn archive(archive: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Archive {
            archive: archive.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_failure_message() {
        let err = Error::download_failure("https://example.com/terragrunt_linux_amd64");
        assert_eq!(
            err.to_string(),
            "Unable to download Terragrunt from https://example.com/terragrunt_linux_amd64"
        );
    }

    #[test]
    fn test_extraction_failure_message() {
        let err = Error::extraction_failure("/tmp/abc.zip");
        assert_eq!(
            err.to_string(),
            "Unable to extract Terragrunt archive /tmp/abc.zip"
        );
    }

    #[test]
    fn test_network_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::network("https://example.com", io);
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("refused"));
    }

    #[test]
    fn test_http_client_message() {
        let io = std::io::Error::other("no TLS backend");
        let err = Error::http_client(io);
        assert_eq!(
            err.to_string(),
            "Failed to build HTTP client: no TLS backend"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_diagnostic_code() {
        let err = Error::http_status("https://example.com", 404);
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("setup_terragrunt::http_status"));
    }
}
