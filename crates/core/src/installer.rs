//! End-to-end installation.
//!
//! `Normalize -> BuildURL -> Download [-> ExtractArchive] -> InstallPath`.
//! The first failing step ends the run; nothing is retried and the search
//! path is only touched once the artifact is ready.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::Result;
use crate::fetch::{ArchiveExtractor, Downloader, ReleaseFetcher};
use crate::platform::HostDescriptor;
use crate::release::{DEFAULT_BASE_URL, DEFAULT_VERSION, ReleaseTarget};
use crate::search_path::SearchPath;
use crate::transport::ArtifactTransport;

/// Explicit inputs of an installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallerConfig {
    /// Terragrunt version without the leading `v`.
    pub version: String,
    /// Host the release is selected for.
    pub host: HostDescriptor,
    /// Asset packaging.
    pub transport: ArtifactTransport,
    /// Release download root.
    pub base_url: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            host: HostDescriptor::current(),
            transport: ArtifactTransport::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl InstallerConfig {
    /// Resolve the release target for this configuration.
    #[must_use]
    pub fn target(&self) -> ReleaseTarget {
        ReleaseTarget::new(&self.version, self.host.normalize(), self.transport)
            .with_base_url(&self.base_url)
    }
}

/// Outcome of a successful installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installation {
    /// `terragrunt_<platform>_<arch>`.
    pub identifier: String,
    /// URL the artifact was downloaded from.
    pub url: String,
    /// Directory prepended to the search path.
    pub path: PathBuf,
}

/// Fetches Terragrunt and registers it on the search path.
pub struct Installer {
    config: InstallerConfig,
    fetcher: ReleaseFetcher,
    search_path: Arc<dyn SearchPath>,
}

impl Installer {
    /// Create an installer from its configuration and capabilities.
    #[must_use]
    pub fn new(
        config: InstallerConfig,
        downloader: Arc<dyn Downloader>,
        extractor: Arc<dyn ArchiveExtractor>,
        search_path: Arc<dyn SearchPath>,
    ) -> Self {
        Self {
            config,
            fetcher: ReleaseFetcher::new(downloader, extractor),
            search_path,
        }
    }

    /// The configuration this installer runs with.
    #[must_use]
    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Install and return the release identifier.
    ///
    /// # Errors
    ///
    /// See [`Installer::install`].
    pub async fn run(&self) -> Result<String> {
        self.install().await.map(|installation| installation.identifier)
    }

    /// Install and return the full outcome.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by download, extraction or path
    /// registration, after logging it.
    pub async fn install(&self) -> Result<Installation> {
        match self.try_install().await {
            Ok(installation) => Ok(installation),
            Err(e) => {
                error!(error = %e, "Terragrunt installation failed");
                Err(e)
            }
        }
    }

    async fn try_install(&self) -> Result<Installation> {
        debug!(version = %self.config.version, "Finding releases for Terragrunt version");
        let target = self.config.target();
        debug!(
            version = %target.version,
            os = %target.platform.os,
            arch = %target.platform.arch,
            "Getting build for Terragrunt version"
        );
        let url = target.url();
        debug!(%url, "Terragrunt download url");

        let path = self.fetcher.fetch(&target).await?;
        self.search_path.prepend(&path)?;

        let identifier = target.identifier();
        info!(%identifier, path = %path.display(), "Installed Terragrunt");
        Ok(Installation {
            identifier,
            url,
            path,
        })
    }
}

impl std::fmt::Debug for Installer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Installer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
