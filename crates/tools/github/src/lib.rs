//! GitHub Releases transport for setup-terragrunt.
//!
//! Provides the network and archive capabilities the core installer is
//! built against:
//! - [`HttpDownloader`] fetches a release asset into an extensionless temp file
//! - [`ZipExtractor`] unpacks a zip asset into a fresh temp directory

mod download;
mod extract;

pub use download::{HttpDownloader, RUNNER_TEMP_VAR, default_temp_root};
pub use extract::ZipExtractor;
