//! HTTP download of release assets.

use async_trait::async_trait;
use reqwest::Client;
use setup_terragrunt_core::{Downloader, Error, Result};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

/// Environment variable GitHub Actions points at the runner's scratch directory.
pub const RUNNER_TEMP_VAR: &str = "RUNNER_TEMP";

/// Directory downloads and extractions land in by default.
///
/// Uses `$RUNNER_TEMP` when set, otherwise the system temp directory.
#[must_use]
pub fn default_temp_root() -> PathBuf {
    std::env::var_os(RUNNER_TEMP_VAR)
        .filter(|v| !v.is_empty())
        .map_or_else(std::env::temp_dir, PathBuf::from)
}

/// Downloads release assets over HTTP(S) into extensionless temp files.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    client: Client,
    temp_root: PathBuf,
}

impl HttpDownloader {
    /// Create a downloader writing into [`default_temp_root`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// initialization failure).
    pub fn new() -> Result<Self> {
        Self::with_temp_root(default_temp_root())
    }

    /// Create a downloader writing into `temp_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_temp_root(temp_root: impl Into<PathBuf>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("setup-terragrunt/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::http_client)?;
        Ok(Self {
            client,
            temp_root: temp_root.into(),
        })
    }

    /// Directory downloads are written to.
    #[must_use]
    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str) -> Result<Option<PathBuf>> {
        debug!(%url, "Downloading release asset");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network(url, e))?;

        if !response.status().is_success() {
            return Err(Error::http_status(url, response.status().as_u16()));
        }

        tokio::fs::create_dir_all(&self.temp_root).await?;
        let dest = self.temp_root.join(Uuid::new_v4().to_string());
        let mut file = tokio::fs::File::create(&dest).await?;

        let written = match write_body(response, &mut file).await {
            Ok(written) => written,
            Err(e) => {
                drop(file);
                let _ = tokio::fs::remove_file(&dest).await;
                return Err(match e {
                    BodyError::Network(e) => Error::network(url, e),
                    BodyError::Io(e) => Error::Io(e),
                });
            }
        };

        debug!(path = %dest.display(), bytes = written, "Downloaded release asset");
        Ok(Some(dest))
    }
}

enum BodyError {
    Network(reqwest::Error),
    Io(std::io::Error),
}

/// Copy the response body into `file` one chunk at a time.
async fn write_body(
    mut response: reqwest::Response,
    file: &mut tokio::fs::File,
) -> std::result::Result<u64, BodyError> {
    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await.map_err(BodyError::Network)? {
        file.write_all(&chunk).await.map_err(BodyError::Io)?;
        written += chunk.len() as u64;
    }
    file.flush().await.map_err(BodyError::Io)?;
    Ok(written)
}
