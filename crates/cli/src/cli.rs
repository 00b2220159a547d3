//! Command line arguments and exit codes.

use clap::{Parser, ValueEnum};
use setup_terragrunt_core::{
    ArtifactTransport, DEFAULT_BASE_URL, DEFAULT_VERSION, HostDescriptor, InstallerConfig,
};
use setup_terragrunt_tools_github::default_temp_root;
use std::path::PathBuf;

use crate::tracing::{LogLevel, TracingFormat};

/// Exit code for a successful installation.
pub const EXIT_OK: u8 = 0;

/// Exit code when the installation fails.
pub const EXIT_FAILURE: u8 = 1;

/// Asset packaging selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportArg {
    /// Download the executable directly
    Raw,
    /// Download a zip archive and extract it
    Zip,
}

impl From<TransportArg> for ArtifactTransport {
    fn from(arg: TransportArg) -> Self {
        match arg {
            TransportArg::Raw => Self::RawBinary,
            TransportArg::Zip => Self::ZipArchive,
        }
    }
}

/// Install a prebuilt Terragrunt release and put it on PATH.
#[derive(Debug, Parser)]
#[command(name = "setup-terragrunt", version, about)]
pub struct Cli {
    /// Terragrunt version to install, without the leading `v`.
    #[arg(long, env = "TERRAGRUNT_VERSION", default_value = DEFAULT_VERSION)]
    pub terragrunt_version: String,

    /// How the release asset is packaged.
    #[arg(
        long,
        env = "SETUP_TERRAGRUNT_TRANSPORT",
        value_enum,
        default_value = "raw"
    )]
    pub transport: TransportArg,

    /// Release download root.
    #[arg(long, env = "SETUP_TERRAGRUNT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Override the host OS identifier (e.g. linux, win32, macos).
    #[arg(long)]
    pub os: Option<String>,

    /// Override the host CPU identifier (e.g. x64, x86_64, arm).
    #[arg(long)]
    pub arch: Option<String>,

    /// Directory downloads and extractions are written to.
    #[arg(long, env = "RUNNER_TEMP")]
    pub temp_dir: Option<PathBuf>,

    /// Logging verbosity level.
    #[arg(short = 'L', long, default_value = "warn", value_enum)]
    pub level: LogLevel,

    /// Explicit tracing filter directive (e.g. `setup_terragrunt_core=trace`).
    ///
    /// Takes precedence over both `RUST_LOG` and `--level`.
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Log output format.
    #[arg(long, default_value = "compact", value_enum)]
    pub log_format: TracingFormat,

    /// Print the installation result as JSON instead of the bare identifier.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Installer configuration described by these arguments.
    #[must_use]
    pub fn installer_config(&self) -> InstallerConfig {
        let current = HostDescriptor::current();
        InstallerConfig {
            version: self.terragrunt_version.clone(),
            host: HostDescriptor::new(
                self.os.clone().unwrap_or(current.os_family),
                self.arch.clone().unwrap_or(current.cpu_arch),
            ),
            transport: self.transport.into(),
            base_url: self.base_url.clone(),
        }
    }

    /// Directory downloads and extractions are written to.
    #[must_use]
    pub fn temp_root(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(default_temp_root)
    }
}

/// Parse arguments from the process command line.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
