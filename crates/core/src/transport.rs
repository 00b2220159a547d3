//! How a release artifact is packaged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Packaging of the release asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactTransport {
    /// The asset is the executable itself.
    #[default]
    #[serde(rename = "raw")]
    RawBinary,
    /// The asset is a zip archive containing the executable.
    #[serde(rename = "zip")]
    ZipArchive,
}

impl ArtifactTransport {
    /// Suffix appended to the asset name in the download URL.
    #[must_use]
    pub fn asset_suffix(self) -> &'static str {
        match self {
            Self::RawBinary => "",
            Self::ZipArchive => ".zip",
        }
    }

    /// Whether the download must be extracted before installation.
    #[must_use]
    pub fn is_archive(self) -> bool {
        matches!(self, Self::ZipArchive)
    }
}

impl fmt::Display for ArtifactTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RawBinary => write!(f, "raw"),
            Self::ZipArchive => write!(f, "zip"),
        }
    }
}

impl std::str::FromStr for ArtifactTransport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" | "binary" => Ok(Self::RawBinary),
            "zip" | "archive" => Ok(Self::ZipArchive),
            _ => Err(format!("Unknown artifact transport: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_suffix() {
        assert_eq!(ArtifactTransport::RawBinary.asset_suffix(), "");
        assert_eq!(ArtifactTransport::ZipArchive.asset_suffix(), ".zip");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "raw".parse::<ArtifactTransport>(),
            Ok(ArtifactTransport::RawBinary)
        );
        assert_eq!(
            "ZIP".parse::<ArtifactTransport>(),
            Ok(ArtifactTransport::ZipArchive)
        );
        assert!("tar".parse::<ArtifactTransport>().is_err());
    }

    #[test]
    fn test_default_is_raw() {
        assert_eq!(ArtifactTransport::default(), ArtifactTransport::RawBinary);
        assert!(!ArtifactTransport::default().is_archive());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ArtifactTransport::ZipArchive).unwrap();
        assert_eq!(json, "\"zip\"");
        let parsed: ArtifactTransport = serde_json::from_str("\"raw\"").unwrap();
        assert_eq!(parsed, ArtifactTransport::RawBinary);
    }
}
