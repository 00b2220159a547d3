//! Zip archive extraction.

use async_trait::async_trait;
use setup_terragrunt_core::{ArchiveExtractor, Error, Result, TOOL_NAME};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::download::default_temp_root;

/// Mode given to extracted files whose entry carries no unix permissions.
#[cfg(unix)]
const DEFAULT_FILE_MODE: u32 = 0o755;

/// Extracts zip archives into fresh directories under a temp root.
#[derive(Debug, Clone)]
pub struct ZipExtractor {
    temp_root: PathBuf,
}

impl Default for ZipExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipExtractor {
    /// Create an extractor writing into [`default_temp_root`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_temp_root(default_temp_root())
    }

    /// Create an extractor writing into `temp_root`.
    #[must_use]
    pub fn with_temp_root(temp_root: impl Into<PathBuf>) -> Self {
        Self {
            temp_root: temp_root.into(),
        }
    }
}

#[async_trait]
impl ArchiveExtractor for ZipExtractor {
    async fn extract(&self, archive: &Path) -> Result<Option<PathBuf>> {
        let archive = archive.to_path_buf();
        let dest = self.temp_root.join(Uuid::new_v4().to_string());

        // Zip decoding is CPU-bound
        tokio::task::spawn_blocking(move || extract_zip(&archive, &dest))
            .await
            .map_err(|e| Error::Io(std::io::Error::other(e)))?
    }
}

/// Extract every entry of `archive` into `dest`.
///
/// Returns `Ok(None)` and leaves nothing behind when the archive holds no
/// extractable entries.
fn extract_zip(archive_path: &Path, dest: &Path) -> Result<Option<PathBuf>> {
    debug!(archive = %archive_path.display(), dest = %dest.display(), "Extracting zip");

    let file = File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| Error::archive(archive_path, format!("Failed to open zip: {e}")))?;

    std::fs::create_dir_all(dest)?;
    let mut written = 0usize;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| {
            Error::archive(archive_path, format!("Failed to read zip entry: {e}"))
        })?;

        let Some(relative) = entry.enclosed_name() else {
            trace!(name = entry.name(), "Skipping entry outside extraction root");
            continue;
        };
        let outpath = dest.join(&relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&outpath)?;
            continue;
        }

        if let Some(parent) = outpath.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&outpath)?;
        std::io::copy(&mut entry, &mut out)?;
        written += 1;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut mode = entry.unix_mode().unwrap_or(DEFAULT_FILE_MODE);
            // Archives built off unix record the executable as 0o644
            if relative.file_stem().is_some_and(|stem| stem == TOOL_NAME) {
                mode |= 0o111;
            }
            std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
        }
    }

    if written == 0 {
        std::fs::remove_dir_all(dest)?;
        return Ok(None);
    }

    debug!(files = written, "Extracted zip");
    Ok(Some(dest.to_path_buf()))
}
