//! Executable search path registration.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{Error, Result};

/// Environment variable naming the file GitHub Actions reads PATH additions from.
pub const GITHUB_PATH_VAR: &str = "GITHUB_PATH";

/// Registers directories so that later processes can resolve bare tool names.
pub trait SearchPath: Send + Sync {
    /// Put `dir` in front of the search path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path list cannot be rebuilt or persisted.
    fn prepend(&self, dir: &Path) -> Result<()>;
}

/// Build a new path list with `dir` in front of `current`.
///
/// # Errors
///
/// Returns [`Error::SearchPath`] if `dir` contains the platform's path separator.
pub fn prepend_path_entry(current: Option<&OsString>, dir: &Path) -> Result<OsString> {
    let mut entries: Vec<PathBuf> = vec![dir.to_path_buf()];
    if let Some(current) = current {
        entries.extend(std::env::split_paths(current));
    }
    std::env::join_paths(entries).map_err(|e| Error::SearchPath(e.to_string()))
}

/// Updates the search path of this process and, on GitHub Actions, of later steps.
#[derive(Debug, Clone, Default)]
pub struct ProcessSearchPath;

impl ProcessSearchPath {
    /// Create the process search path installer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SearchPath for ProcessSearchPath {
    #[allow(unsafe_code)]
    fn prepend(&self, dir: &Path) -> Result<()> {
        let current = std::env::var_os("PATH");
        let updated = prepend_path_entry(current.as_ref(), dir)?;

        if let Some(file) = std::env::var_os(GITHUB_PATH_VAR).filter(|v| !v.is_empty()) {
            let mut out = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&file)?;
            writeln!(out, "{}", dir.display())?;
            debug!(file = ?file, dir = %dir.display(), "Appended to GITHUB_PATH");
        }

        // SAFETY: the installer runs on a single thread and no other thread
        // reads the environment while the search path is being replaced.
        unsafe {
            std::env::set_var("PATH", &updated);
        }
        debug!(dir = %dir.display(), "Prepended to PATH");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prepend_to_existing() {
        let current = std::env::join_paths(["/usr/bin", "/bin"]).unwrap();
        let updated = prepend_path_entry(Some(&current), Path::new("/opt/tg")).unwrap();
        let entries: Vec<PathBuf> = std::env::split_paths(&updated).collect();
        assert_eq!(
            entries,
            vec![
                PathBuf::from("/opt/tg"),
                PathBuf::from("/usr/bin"),
                PathBuf::from("/bin")
            ]
        );
    }

    #[test]
    fn test_prepend_to_empty() {
        let updated = prepend_path_entry(None, Path::new("/opt/tg")).unwrap();
        assert_eq!(updated, OsString::from("/opt/tg"));
    }

    #[cfg(unix)]
    #[test]
    fn test_prepend_rejects_separator() {
        let err = prepend_path_entry(None, Path::new("/opt/a:b")).unwrap_err();
        assert!(matches!(err, Error::SearchPath(_)));
    }

    #[test]
    fn test_process_search_path_updates_path() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bin");

        temp_env::with_vars(
            [("PATH", Some("/usr/bin")), (GITHUB_PATH_VAR, None::<&str>)],
            || {
                ProcessSearchPath::new().prepend(&dir).unwrap();
                let path = std::env::var_os("PATH").unwrap();
                let first = std::env::split_paths(&path).next().unwrap();
                assert_eq!(first, dir);
            },
        );
    }

    #[test]
    fn test_process_search_path_appends_github_path() {
        let temp = TempDir::new().unwrap();
        let github_path = temp.path().join("github_path");
        std::fs::write(&github_path, "/already/there\n").unwrap();
        let dir = temp.path().join("bin");

        temp_env::with_vars(
            [
                ("PATH", Some(OsString::from("/usr/bin"))),
                (GITHUB_PATH_VAR, Some(github_path.clone().into_os_string())),
            ],
            || {
                ProcessSearchPath::new().prepend(&dir).unwrap();
            },
        );

        let contents = std::fs::read_to_string(&github_path).unwrap();
        assert_eq!(contents, format!("/already/there\n{}\n", dir.display()));
    }

    #[cfg(unix)]
    #[test]
    fn test_rejected_dir_is_not_persisted() {
        let temp = TempDir::new().unwrap();
        let github_path = temp.path().join("github_path");
        std::fs::write(&github_path, "/already/there\n").unwrap();
        let dir = temp.path().join("a:b");

        temp_env::with_vars(
            [
                ("PATH", Some(OsString::from("/usr/bin"))),
                (GITHUB_PATH_VAR, Some(github_path.clone().into_os_string())),
            ],
            || {
                let err = ProcessSearchPath::new().prepend(&dir).unwrap_err();
                assert!(matches!(err, Error::SearchPath(_)));
                assert_eq!(std::env::var_os("PATH"), Some(OsString::from("/usr/bin")));
            },
        );

        let contents = std::fs::read_to_string(&github_path).unwrap();
        assert_eq!(contents, "/already/there\n");
    }
}
