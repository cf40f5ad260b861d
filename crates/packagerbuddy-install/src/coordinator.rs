//! Install pipeline: resolve, fetch, extract into staging, promote
//!
//! ```text
//! installed? ──yes──> AlreadyInstalled
//!     │ no
//! resolve template ──> lock ──> installed? ──yes──> AlreadyInstalled
//!                                  │ no
//!             find_or_download ──> extract into tmp-{software}-{version}
//!                                  │
//!                       promote (single rename) ──> Installed
//! ```
//!
//! A forced reinstall skips both installed checks and parks the existing
//! install under `.replaced/` until the new one has been promoted.

use crate::extract::{ArchiveExtractor, Extract};
use crate::fetch::HttpFetcher;
use crate::lock::InstallLock;
use crate::store::ArchiveStore;
use glob::Pattern;
use packagerbuddy_core::paths::{self, TEMP_PREFIX};
use packagerbuddy_core::{Config, Error, Result, Settings, SoftwareName, Version};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Directory under the install root holding installs being replaced
pub const BACKUP_DIR_NAME: &str = ".replaced";

/// Result of an install request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The release was extracted and promoted by this call
    Installed(PathBuf),
    /// The install directory already existed; nothing was done
    AlreadyInstalled(PathBuf),
}

impl InstallOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Installed(path) | Self::AlreadyInstalled(path) => path,
        }
    }

    /// Whether this call performed the install
    pub fn is_fresh(&self) -> bool {
        matches!(self, Self::Installed(_))
    }
}

/// Orchestrates archive retrieval and installation of releases
pub struct InstallCoordinator {
    install_dir: PathBuf,
    store: ArchiveStore,
    extractor: Arc<dyn Extract>,
}

impl InstallCoordinator {
    pub fn new(
        install_dir: impl Into<PathBuf>,
        store: ArchiveStore,
        extractor: Arc<dyn Extract>,
    ) -> Self {
        Self {
            install_dir: install_dir.into(),
            store,
            extractor,
        }
    }

    /// Coordinator wired to the HTTP fetcher and archive extractor
    pub fn from_settings(settings: &Settings, show_progress: bool) -> Result<Self> {
        let fetcher = HttpFetcher::new()?.with_progress(show_progress);
        let store = ArchiveStore::new(&settings.download_dir, Arc::new(fetcher));
        Ok(Self::new(&settings.install_dir, store, Arc::new(ArchiveExtractor)))
    }

    pub fn install_dir(&self) -> &Path {
        &self.install_dir
    }

    pub fn store(&self) -> &ArchiveStore {
        &self.store
    }

    pub fn install_path(&self, software: &SoftwareName, version: &Version) -> PathBuf {
        paths::install_path(&self.install_dir, software, version)
    }

    /// A release is installed when its install directory exists
    pub fn is_installed(&self, software: &SoftwareName, version: &Version) -> bool {
        self.install_path(software, version).exists()
    }

    /// Install a release, reusing an existing install or cached archive
    pub async fn install(
        &self,
        software: &SoftwareName,
        version: &Version,
        config: &Config,
    ) -> Result<InstallOutcome> {
        let install_path = self.install_path(software, version);
        if install_path.exists() {
            info!("{} {} is already installed", software, version);
            return Ok(InstallOutcome::AlreadyInstalled(install_path));
        }

        let url = config.require_template(software)?.render(version);

        let _lock = self.lock(software, version).await?;
        if install_path.exists() {
            info!(
                "{} {} was installed while waiting for the lock",
                software, version
            );
            return Ok(InstallOutcome::AlreadyInstalled(install_path));
        }

        self.fetch_and_promote(software, version, config, &url, None).await?;

        info!("Installed {} {} to {}", software, version, install_path.display());
        Ok(InstallOutcome::Installed(install_path))
    }

    /// Install a release over any existing install of it
    ///
    /// The new release is fetched and staged before the existing install is
    /// touched. During promotion the old install is moved aside, and it is
    /// put back if promotion fails.
    pub async fn reinstall(
        &self,
        software: &SoftwareName,
        version: &Version,
        config: &Config,
    ) -> Result<InstallOutcome> {
        let url = config.require_template(software)?.render(version);

        let _lock = self.lock(software, version).await?;
        let backup = self.backup_path(software, version);
        self.fetch_and_promote(software, version, config, &url, Some(backup))
            .await?;

        let install_path = self.install_path(software, version);
        info!("Reinstalled {} {} to {}", software, version, install_path.display());
        Ok(InstallOutcome::Installed(install_path))
    }

    /// Where an existing install is parked while a reinstall promotes
    pub fn backup_path(&self, software: &SoftwareName, version: &Version) -> PathBuf {
        self.install_dir
            .join(BACKUP_DIR_NAME)
            .join(paths::release_name(software, version))
    }

    /// Fetch, stage, and promote a release; the caller holds the lock
    async fn fetch_and_promote(
        &self,
        software: &SoftwareName,
        version: &Version,
        config: &Config,
        url: &str,
        backup: Option<PathBuf>,
    ) -> Result<()> {
        let (archive, downloaded) = self
            .store
            .find_or_download(software, version, config)
            .await?;
        if !downloaded {
            info!("Reusing archive {}", archive.display());
        }

        let temp_path = paths::temp_install_path(&self.install_dir, software, version);
        let stems = [paths::archive_stem(url), paths::release_name(software, version)];
        let extractor = Arc::clone(&self.extractor);
        let target = self.install_path(software, version);

        tokio::task::spawn_blocking(move || {
            stage(extractor.as_ref(), &archive, &temp_path)?;
            match backup {
                Some(backup) => replace(&temp_path, &target, &backup, &stems),
                None => promote(&temp_path, &target, &stems),
            }
        })
        .await
        .map_err(|e| Error::Io(io::Error::other(e)))?
    }

    async fn lock(&self, software: &SoftwareName, version: &Version) -> Result<InstallLock> {
        let install_dir = self.install_dir.clone();
        let software = software.clone();
        let version = version.clone();

        tokio::task::spawn_blocking(move || {
            InstallLock::acquire(&install_dir, &software, &version)
        })
        .await
        .map_err(|e| Error::Io(io::Error::other(e)))?
    }

    /// Installed releases, optionally narrowed by software and version
    ///
    /// Staging directories and plain files are never reported. Since the
    /// pattern is `{software}-{version}`, listing `foo` also matches releases
    /// of a software named `foo-bar`.
    pub fn list_installed(
        &self,
        software: Option<&SoftwareName>,
        version: Option<&Version>,
    ) -> Result<Vec<PathBuf>> {
        let software = software.map_or_else(|| "*".to_string(), |s| Pattern::escape(s.as_str()));
        let version = version.map_or_else(|| "*".to_string(), |v| Pattern::escape(v.as_str()));
        let pattern = Pattern::new(&format!("{}-{}", software, version))?;
        debug!("Listing installs matching {}", pattern);

        let entries = match fs::read_dir(&self.install_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::Io(e)),
        };

        let mut installed = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.starts_with(TEMP_PREFIX) || !pattern.matches(name) {
                continue;
            }
            if entry.file_type()?.is_dir() {
                installed.push(entry.path());
            }
        }

        installed.sort();
        Ok(installed)
    }

    /// Recursively delete one install directory
    ///
    /// The path must be a direct child of the install root.
    pub fn uninstall(&self, install_path: &Path) -> Result<()> {
        if install_path.parent() != Some(self.install_dir.as_path()) {
            return Err(Error::validation(format!(
                "{} is not inside the install directory {}",
                install_path.display(),
                self.install_dir.display()
            )));
        }

        fs::remove_dir_all(install_path)?;
        info!("Uninstalled {}", install_path.display());
        Ok(())
    }
}

/// Extract an archive into a clean staging directory
///
/// Leftovers from an interrupted attempt are cleared first. A failed
/// extraction removes the staging directory again.
fn stage(extractor: &dyn Extract, archive: &Path, temp_path: &Path) -> Result<()> {
    if temp_path.exists() {
        warn!("Removing stale staging directory {}", temp_path.display());
        fs::remove_dir_all(temp_path)?;
    }

    if let Err(e) = extractor.unarchive(archive, temp_path) {
        if temp_path.exists() {
            if let Err(cleanup) = fs::remove_dir_all(temp_path) {
                warn!(
                    "Failed to remove staging directory {}: {}",
                    temp_path.display(),
                    cleanup
                );
            }
        }
        return Err(e);
    }

    Ok(())
}

/// Move staged content to the install path with a single rename
///
/// A lone directory named after the archive stem is a wrapper and gets
/// promoted on its own; anything else is promoted as a whole.
fn promote(temp_path: &Path, install_path: &Path, stems: &[String]) -> Result<()> {
    let entries = fs::read_dir(temp_path)?.collect::<io::Result<Vec<_>>>()?;

    if let [entry] = entries.as_slice() {
        let name = entry.file_name();
        let is_wrapper = entry.file_type()?.is_dir()
            && name
                .to_str()
                .is_some_and(|name| stems.iter().any(|stem| stem == name));

        if is_wrapper {
            debug!("De-nesting {:?} into {}", name, install_path.display());
            fs::rename(entry.path(), install_path)?;
            fs::remove_dir(temp_path)?;
            return Ok(());
        }

        debug!(
            "Keeping single root {:?} nested, expected one of {:?}",
            name, stems
        );
    }

    fs::rename(temp_path, install_path)?;
    Ok(())
}

/// Promote staged content over an existing install
///
/// The old install is renamed to `backup` and only deleted after the new
/// content is in place. If promotion fails it is renamed back.
fn replace(
    temp_path: &Path,
    install_path: &Path,
    backup: &Path,
    stems: &[String],
) -> Result<()> {
    if !install_path.exists() {
        return promote(temp_path, install_path, stems);
    }

    if backup.exists() {
        warn!("Removing stale backup {}", backup.display());
        fs::remove_dir_all(backup)?;
    }
    if let Some(parent) = backup.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::rename(install_path, backup)?;

    if let Err(e) = promote(temp_path, install_path, stems) {
        if let Err(restore) = fs::rename(backup, install_path) {
            warn!(
                "Failed to restore {} from {}: {}",
                install_path.display(),
                backup.display(),
                restore
            );
        }
        return Err(e);
    }

    if let Err(e) = fs::remove_dir_all(backup) {
        warn!("Failed to remove previous install {}: {}", backup.display(), e);
    }
    Ok(())
}
