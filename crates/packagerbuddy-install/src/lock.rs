//! Advisory per-release install lock
//!
//! Lock files are never deleted, so `.locks/` keeps one empty file per
//! release ever installed. A lock file must not be unlinked while another
//! process may be waiting on it.

use fs4::fs_std::FileExt;
use packagerbuddy_core::paths;
use packagerbuddy_core::{Result, SoftwareName, Version};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory under the install root holding lock files
pub const LOCK_DIR_NAME: &str = ".locks";

/// Exclusive lock on one `(software, version)` pair
///
/// Held for the fetch, extract, and promote phases. The lock is released
/// when the guard is dropped. The lock file itself is left in place.
#[derive(Debug)]
pub struct InstallLock {
    path: PathBuf,
    _file: File,
}

impl InstallLock {
    /// Lock file location for a release
    pub fn lock_path(install_dir: &Path, software: &SoftwareName, version: &Version) -> PathBuf {
        install_dir
            .join(LOCK_DIR_NAME)
            .join(format!("{}.lock", paths::release_name(software, version)))
    }

    /// Block until the exclusive lock for a release is acquired
    pub fn acquire(
        install_dir: &Path,
        software: &SoftwareName,
        version: &Version,
    ) -> Result<Self> {
        let path = Self::lock_path(install_dir, software, version);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)?;

        debug!("Waiting for install lock {}", path.display());
        file.lock_exclusive()?;
        debug!("Acquired install lock {}", path.display());

        Ok(Self { path, _file: file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for InstallLock {
    fn drop(&mut self) {
        debug!("Released install lock {}", self.path.display());
    }
}
