//! Download directory holding one archive per `(software, version)`

use crate::fetch::Fetch;
use packagerbuddy_core::paths::{self, SUPPORTED_EXTENSIONS};
use packagerbuddy_core::{Config, Error, Result, SoftwareName, Version};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Archive cache backed by the download directory
pub struct ArchiveStore {
    download_dir: PathBuf,
    fetcher: Arc<dyn Fetch>,
}

impl ArchiveStore {
    pub fn new(download_dir: impl Into<PathBuf>, fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            download_dir: download_dir.into(),
            fetcher,
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Locate an already downloaded archive for a release
    ///
    /// A file matches when its name is `{software}-{version}` followed by
    /// nothing or by a recognized archive extension. When several archives
    /// match, the lexicographically smallest name wins.
    pub fn find_archive(
        &self,
        software: &SoftwareName,
        version: &Version,
    ) -> Result<Option<PathBuf>> {
        let prefix = paths::release_name(software, version);

        let entries = match fs::read_dir(&self.download_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Io(e)),
        };

        let mut matches = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };

            let is_match = name
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || SUPPORTED_EXTENSIONS.contains(&rest));
            if is_match {
                matches.push(name.to_string());
            }
        }

        matches.sort();
        if matches.len() > 1 {
            debug!(
                "Multiple archives for {}: {:?}, using {}",
                prefix, matches, matches[0]
            );
        }

        Ok(matches
            .into_iter()
            .next()
            .map(|name| self.download_dir.join(name)))
    }

    /// Download the archive of a release into the download directory
    ///
    /// The body is streamed into a temporary file next to the destination
    /// and renamed into place once complete, so the archive path never holds
    /// a partial download.
    pub async fn download(
        &self,
        software: &SoftwareName,
        version: &Version,
        config: &Config,
    ) -> Result<PathBuf> {
        let template = config.require_template(software)?;
        let url = template.render(version);
        let archive = paths::archive_path(&self.download_dir, software, version, &url);

        fs::create_dir_all(&self.download_dir)?;

        info!("Downloading {} {} from {}", software, version, url);

        let mut partial = tempfile::Builder::new()
            .prefix(".pb-")
            .suffix(".part")
            .tempfile_in(&self.download_dir)?;

        // Dropping `partial` on error removes the temporary file.
        let size = self.fetcher.fetch(&url, partial.as_file_mut()).await?;
        partial.as_file().sync_all()?;
        partial.persist(&archive).map_err(|e| Error::Io(e.error))?;

        info!("Saved {} ({} bytes)", archive.display(), size);
        Ok(archive)
    }

    /// Reuse a downloaded archive or fetch it
    ///
    /// The flag is true when a download happened.
    pub async fn find_or_download(
        &self,
        software: &SoftwareName,
        version: &Version,
        config: &Config,
    ) -> Result<(PathBuf, bool)> {
        if let Some(archive) = self.find_archive(software, version)? {
            debug!("Using cached archive {}", archive.display());
            return Ok((archive, false));
        }

        let archive = self.download(software, version, config).await?;
        Ok((archive, true))
    }
}
