//! Host detection and normalization to Terragrunt's release naming.
//!
//! Handles mapping between:
//! - host identifiers (Node-style `win32`/`x64` or Rust's `macos`/`x86_64`)
//! - release asset names (`darwin`/`linux`/`windows`, `386`/`amd64`/`arm64`)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Map a host OS identifier to the vendor's `{darwin, linux, windows}` scheme.
///
/// Identifiers outside the rename table are returned unchanged.
#[must_use]
pub fn normalize_os(raw: &str) -> String {
    match raw {
        "win32" | "windows" => "windows",
        "darwin" | "macos" => "darwin",
        "linux" => "linux",
        other => other,
    }
    .to_string()
}

/// Map a host CPU identifier to the vendor's `{386, amd64}` scheme.
///
/// Identifiers outside the rename table are returned unchanged, so `arm`
/// stays `arm`.
#[must_use]
pub fn normalize_arch(raw: &str) -> String {
    match raw {
        "x32" | "x86" => "386",
        "x64" | "x86_64" => "amd64",
        "aarch64" => "arm64",
        other => other,
    }
    .to_string()
}

/// OS family and CPU architecture as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostDescriptor {
    /// Raw OS identifier (e.g. "linux", "win32", "macos").
    pub os_family: String,
    /// Raw CPU identifier (e.g. "x64", "x86_64", "arm").
    pub cpu_arch: String,
}

impl HostDescriptor {
    /// Create a descriptor from explicit identifiers.
    #[must_use]
    pub fn new(os_family: impl Into<String>, cpu_arch: impl Into<String>) -> Self {
        Self {
            os_family: os_family.into(),
            cpu_arch: cpu_arch.into(),
        }
    }

    /// Describe the machine running this process.
    #[must_use]
    pub fn current() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Translate to release naming.
    #[must_use]
    pub fn normalize(&self) -> Platform {
        Platform::new(normalize_os(&self.os_family), normalize_arch(&self.cpu_arch))
    }
}

impl Default for HostDescriptor {
    fn default() -> Self {
        Self::current()
    }
}

/// A normalized platform, named the way release assets are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
    /// Operating system (darwin, linux, windows).
    pub os: String,
    /// Architecture (386, amd64, arm64).
    pub arch: String,
}

impl Platform {
    /// Create a new platform.
    #[must_use]
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Whether release assets for this platform are Windows builds.
    #[must_use]
    pub fn is_windows(&self) -> bool {
        self.os == "windows"
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_os_documented() {
        assert_eq!(normalize_os("win32"), "windows");
        assert_eq!(normalize_os("darwin"), "darwin");
        assert_eq!(normalize_os("linux"), "linux");
    }

    #[test]
    fn test_normalize_os_rust_identifiers() {
        assert_eq!(normalize_os("macos"), "darwin");
        assert_eq!(normalize_os("windows"), "windows");
    }

    #[test]
    fn test_normalize_os_passthrough() {
        assert_eq!(normalize_os("freebsd"), "freebsd");
        assert_eq!(normalize_os("aix"), "aix");
        assert_eq!(normalize_os(""), "");
        // Matching is exact
        assert_eq!(normalize_os("Win32"), "Win32");
    }

    #[test]
    fn test_normalize_arch_documented() {
        assert_eq!(normalize_arch("x64"), "amd64");
        assert_eq!(normalize_arch("x32"), "386");
    }

    #[test]
    fn test_normalize_arch_rust_identifiers() {
        assert_eq!(normalize_arch("x86_64"), "amd64");
        assert_eq!(normalize_arch("x86"), "386");
        assert_eq!(normalize_arch("aarch64"), "arm64");
    }

    #[test]
    fn test_normalize_arch_passthrough() {
        assert_eq!(normalize_arch("arm"), "arm");
        assert_eq!(normalize_arch("arm64"), "arm64");
        assert_eq!(normalize_arch("ppc64"), "ppc64");
    }

    #[test]
    fn test_host_normalize() {
        let host = HostDescriptor::new("linux", "x64");
        assert_eq!(host.normalize(), Platform::new("linux", "amd64"));

        let host = HostDescriptor::new("win32", "x32");
        assert_eq!(host.normalize(), Platform::new("windows", "386"));
    }

    #[test]
    fn test_host_current() {
        let host = HostDescriptor::current();
        assert_eq!(host.os_family, std::env::consts::OS);
        assert_eq!(host.cpu_arch, std::env::consts::ARCH);
        assert!(!host.normalize().os.is_empty());
    }

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::new("darwin", "arm64").to_string(), "darwin_arm64");
    }

    #[test]
    fn test_platform_is_windows() {
        assert!(Platform::new("windows", "amd64").is_windows());
        assert!(!Platform::new("linux", "amd64").is_windows());
    }
}
