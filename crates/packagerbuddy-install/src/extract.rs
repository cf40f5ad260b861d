//! Archive extraction dispatched on file extension

use packagerbuddy_core::{Error, Result};
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Supported archive layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    Tar,
    TarGz,
    TarBz2,
}

impl ArchiveKind {
    /// Suffix table, longest suffix first
    const SUFFIXES: &'static [(&'static str, ArchiveKind)] = &[
        (".tar.bz2", ArchiveKind::TarBz2),
        (".tar.gz", ArchiveKind::TarGz),
        (".tar.bz", ArchiveKind::TarBz2),
        (".tgz", ArchiveKind::TarGz),
        (".tar", ArchiveKind::Tar),
        (".zip", ArchiveKind::Zip),
    ];

    /// Select the handler for an archive path by its suffix
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        Self::SUFFIXES
            .iter()
            .find(|(suffix, _)| name.ends_with(suffix))
            .map(|(_, kind)| *kind)
    }
}

/// Unpacks an archive into a directory
pub trait Extract: Send + Sync {
    /// Extract every entry of `archive` into `target`, keeping the
    /// archive's internal directory structure
    fn unarchive(&self, archive: &Path, target: &Path) -> Result<()>;
}

/// Extractor for zip and (optionally compressed) tar archives
#[derive(Debug, Default, Clone, Copy)]
pub struct ArchiveExtractor;

impl Extract for ArchiveExtractor {
    fn unarchive(&self, archive: &Path, target: &Path) -> Result<()> {
        let kind =
            ArchiveKind::detect(archive).ok_or_else(|| Error::unsupported_format(archive))?;

        info!(
            "Extracting {:?} archive {} to {}",
            kind,
            archive.display(),
            target.display()
        );

        fs::create_dir_all(target)?;

        match kind {
            ArchiveKind::Zip => extract_zip(archive, target),
            ArchiveKind::Tar => extract_tar(open(archive)?, target),
            ArchiveKind::TarGz => {
                extract_tar(flate2::read::GzDecoder::new(open(archive)?), target)
            }
            ArchiveKind::TarBz2 => {
                extract_tar(bzip2::read::BzDecoder::new(open(archive)?), target)
            }
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

fn extract_tar<R: Read>(reader: R, target: &Path) -> Result<()> {
    let mut archive = tar::Archive::new(reader);
    archive.set_preserve_permissions(true);
    archive.unpack(target)?;

    debug!("TAR extraction complete");
    Ok(())
}

fn extract_zip(archive_path: &Path, target: &Path) -> Result<()> {
    let file = File::open(archive_path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|e| Error::archive(archive_path, e.to_string()))?;

    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| Error::archive(archive_path, e.to_string()))?;

        let entry_path = match entry.enclosed_name() {
            Some(path) => path.to_owned(),
            None => {
                debug!("Skipping unsafe path in zip: {}", entry.name());
                continue;
            }
        };
        let dest_path = target.join(&entry_path);

        if entry.is_dir() {
            fs::create_dir_all(&dest_path)?;
            continue;
        }

        if let Some(parent) = dest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut outfile = File::create(&dest_path)?;
        io::copy(&mut entry, &mut outfile)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&dest_path, fs::Permissions::from_mode(mode))?;
            }
        }
    }

    debug!("ZIP extraction complete");
    Ok(())
}
