//! Release target resolution.
//!
//! A [`ReleaseTarget`] pins everything needed to locate one prebuilt
//! Terragrunt asset. The URL is derived, never stored, so it stays a pure
//! function of the target's fields.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;
use crate::transport::ArtifactTransport;

/// Version installed when none is configured.
pub const DEFAULT_VERSION: &str = "0.38.7";

/// Base URL of Terragrunt's GitHub release downloads.
pub const DEFAULT_BASE_URL: &str = "https://github.com/gruntwork-io/terragrunt/releases/download";

/// Executable and asset name prefix.
pub const TOOL_NAME: &str = "terragrunt";

/// A fully resolved release artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseTarget {
    /// Version without the leading `v`.
    pub version: String,
    /// Normalized platform.
    pub platform: Platform,
    /// Asset packaging.
    pub transport: ArtifactTransport,
    /// Release download root, without trailing slash.
    pub base_url: String,
}

impl ReleaseTarget {
    /// Create a target against the default GitHub release host.
    #[must_use]
    pub fn new(version: impl Into<String>, platform: Platform, transport: ArtifactTransport) -> Self {
        Self {
            version: version.into(),
            platform,
            transport,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Use a different download root (mirrors, tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Identifier reported after installation, e.g. `terragrunt_linux_amd64`.
    #[must_use]
    pub fn identifier(&self) -> String {
        format!("{TOOL_NAME}_{}", self.platform)
    }

    /// Asset file name including the transport suffix.
    #[must_use]
    pub fn asset_name(&self) -> String {
        format!("{}{}", self.identifier(), self.transport.asset_suffix())
    }

    /// Download URL of the asset.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}/v{}/{}", self.base_url, self.version, self.asset_name())
    }

    /// File name the executable is installed under.
    #[must_use]
    pub fn executable_name(&self) -> String {
        if self.platform.is_windows() {
            format!("{TOOL_NAME}.exe")
        } else {
            TOOL_NAME.to_string()
        }
    }
}
