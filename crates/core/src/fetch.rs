//! Release fetching.
//!
//! The fetcher owns the flow from URL to a local directory holding the
//! executable. The network and archive work is delegated to the
//! [`Downloader`] and [`ArchiveExtractor`] capabilities so that the flow can
//! run against in-memory fakes.

use async_trait::async_trait;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::release::ReleaseTarget;
use crate::transport::ArtifactTransport;
use crate::{Error, Result};

/// Downloads a URL to a host-managed temporary file.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Download `url` and return the local file.
    ///
    /// `Ok(None)` means the facility completed without producing a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or the write fails.
    async fn download(&self, url: &str) -> Result<Option<PathBuf>>;
}

/// Unpacks a zip archive to a host-managed temporary directory.
#[async_trait]
pub trait ArchiveExtractor: Send + Sync {
    /// Extract `archive` and return the output directory.
    ///
    /// `Ok(None)` means nothing was extracted.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be read or written out.
    async fn extract(&self, archive: &Path) -> Result<Option<PathBuf>>;
}

/// Fetches a [`ReleaseTarget`] and returns the directory to put on the search path.
#[derive(Clone)]
pub struct ReleaseFetcher {
    downloader: Arc<dyn Downloader>,
    extractor: Arc<dyn ArchiveExtractor>,
}

impl ReleaseFetcher {
    /// Create a fetcher from its capabilities.
    #[must_use]
    pub fn new(downloader: Arc<dyn Downloader>, extractor: Arc<dyn ArchiveExtractor>) -> Self {
        Self {
            downloader,
            extractor,
        }
    }

    /// Download the target and prepare it for installation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DownloadFailure`] if the download yields no file,
    /// [`Error::ExtractionFailure`] if extraction yields no directory, and
    /// any lower-level error unchanged.
    pub async fn fetch(&self, target: &ReleaseTarget) -> Result<PathBuf> {
        let url = target.url();
        debug!(%url, "Downloading Terragrunt CLI");

        let downloaded = self
            .downloader
            .download(&url)
            .await?
            .ok_or_else(|| Error::download_failure(&url))?;
        debug!(path = %downloaded.display(), "Terragrunt CLI download file");

        match target.transport {
            ArtifactTransport::RawBinary => stage_binary(&downloaded, target).await,
            ArtifactTransport::ZipArchive => {
                let archive = if target.platform.is_windows() {
                    // Windows extraction requires the .zip extension
                    let renamed = with_zip_suffix(&downloaded);
                    tokio::fs::rename(&downloaded, &renamed).await?;
                    renamed
                } else {
                    downloaded
                };

                let dir = self
                    .extractor
                    .extract(&archive)
                    .await?
                    .ok_or_else(|| Error::extraction_failure(&archive))?;
                debug!(path = %dir.display(), "Extracted Terragrunt archive");
                Ok(dir)
            }
        }
    }
}

impl std::fmt::Debug for ReleaseFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReleaseFetcher").finish_non_exhaustive()
    }
}

fn with_zip_suffix(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".zip");
    PathBuf::from(name)
}

/// Move a downloaded executable into its own directory under its tool name.
async fn stage_binary(downloaded: &Path, target: &ReleaseTarget) -> Result<PathBuf> {
    let file_name = downloaded.file_name().ok_or_else(|| {
        Error::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("download path has no file name: {}", downloaded.display()),
        ))
    })?;

    let mut dir_name = file_name.to_owned();
    dir_name.push("-bin");
    let bin_dir = downloaded.with_file_name(dir_name);
    tokio::fs::create_dir_all(&bin_dir).await?;

    let binary = bin_dir.join(target.executable_name());
    tokio::fs::rename(downloaded, &binary).await?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = tokio::fs::metadata(&binary).await?.permissions();
        perms.set_mode(0o755);
        tokio::fs::set_permissions(&binary, perms).await?;
    }

    debug!(binary = %binary.display(), "Staged Terragrunt binary");
    Ok(bin_dir)
}
