//! setup-terragrunt CLI library.
//!
//! Wires the core installer to the GitHub Releases transport and the process
//! search path, driven by [`cli::Cli`].

/// CLI argument parsing and exit codes.
pub mod cli;
/// Tracing and logging configuration.
pub mod tracing;

use ::tracing::Instrument;
use setup_terragrunt_core::{Installation, Installer, ProcessSearchPath, Result};
use setup_terragrunt_tools_github::{HttpDownloader, ZipExtractor};
use std::sync::Arc;

use crate::cli::Cli;

/// Build the installer described by `cli`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn build_installer(cli: &Cli) -> Result<Installer> {
    let temp_root = cli.temp_root();
    Ok(Installer::new(
        cli.installer_config(),
        Arc::new(HttpDownloader::with_temp_root(&temp_root)?),
        Arc::new(ZipExtractor::with_temp_root(temp_root)),
        Arc::new(ProcessSearchPath::new()),
    ))
}

/// Install Terragrunt as described by `cli`.
///
/// # Errors
///
/// Returns the first error of the installation flow.
pub async fn run(cli: &Cli) -> Result<Installation> {
    let span = ::tracing::info_span!(
        "install",
        correlation_id = %crate::tracing::correlation_id(),
        version = %cli.terragrunt_version,
    );
    build_installer(cli)?.install().instrument(span).await
}
