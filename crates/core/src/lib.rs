//! Core of setup-terragrunt.
//!
//! Resolves the Terragrunt release matching a host, fetches it and registers
//! its directory on the executable search path.
//!
//! # Architecture
//!
//! - [`HostDescriptor`], [`Platform`] - host identification and release naming
//! - [`ReleaseTarget`] - a resolved (version, platform, transport) with its URL
//! - [`ReleaseFetcher`] - download and optional extraction, via the
//!   [`Downloader`] and [`ArchiveExtractor`] capabilities
//! - [`SearchPath`] - registering the installed directory
//! - [`Installer`] - the composed flow
//!
//! # Example
//!
//! ```ignore
//! use setup_terragrunt_core::{Installer, InstallerConfig, ProcessSearchPath};
//! use setup_terragrunt_tools_github::{HttpDownloader, ZipExtractor};
//!
//! let installer = Installer::new(
//!     InstallerConfig::default(),
//!     Arc::new(HttpDownloader::new()?),
//!     Arc::new(ZipExtractor::new()),
//!     Arc::new(ProcessSearchPath::new()),
//! );
//! let identifier = installer.run().await?;
//! ```

mod error;
pub mod fetch;
pub mod installer;
pub mod platform;
pub mod release;
pub mod search_path;
pub mod transport;

pub use error::{Error, Result};
pub use fetch::{ArchiveExtractor, Downloader, ReleaseFetcher};
pub use installer::{Installation, Installer, InstallerConfig};
pub use platform::{HostDescriptor, Platform, normalize_arch, normalize_os};
pub use release::{DEFAULT_BASE_URL, DEFAULT_VERSION, ReleaseTarget, TOOL_NAME};
pub use search_path::{GITHUB_PATH_VAR, ProcessSearchPath, SearchPath, prepend_path_entry};
pub use transport::ArtifactTransport;
