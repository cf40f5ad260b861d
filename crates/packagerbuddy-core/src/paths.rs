//! Canonical archive, staging, and install path naming
//!
//! Every path the pipeline touches is derived from a `(software, version)`
//! pair, plus the download URL for archives. Nothing here performs I/O.
//!
//! ```text
//! {download_dir}/{software}-{version}{ext}     archive
//! {install_dir}/tmp-{software}-{version}       staging (extract phase only)
//! {install_dir}/{software}-{version}           install
//! ```

use crate::types::{SoftwareName, Version};
use std::path::{Path, PathBuf};

/// Prefix of the transient staging directory in the install root
pub const TEMP_PREFIX: &str = "tmp-";

/// Recognized archive extensions, longest match first
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &[".tar.bz2", ".tar.gz", ".tar.bz", ".tgz", ".tar", ".zip"];

/// Split a path into its root and a recognized archive extension
///
/// Falls back to `(path, "")` when no known extension matches. A naive
/// single-dot split would report `.gz` for `.tar.gz`.
pub fn split_extension(path: &str) -> (&str, &str) {
    SUPPORTED_EXTENSIONS
        .iter()
        .find_map(|ext| path.strip_suffix(ext).map(|root| (root, *ext)))
        .unwrap_or((path, ""))
}

/// `{software}-{version}`, the shared stem of archive and install names
pub fn release_name(software: &SoftwareName, version: &Version) -> String {
    format!("{}-{}", software, version)
}

/// Last path segment of a URL, ignoring query string and fragment
fn url_file_name(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string(),
        Err(_) => {
            let path = url.split(['?', '#']).next().unwrap_or_default();
            path.rsplit('/').next().unwrap_or_default().to_string()
        }
    }
}

/// Archive extension of a download URL (empty when unrecognized)
pub fn url_extension(url: &str) -> String {
    let file_name = url_file_name(url);
    split_extension(&file_name).1.to_string()
}

/// File name of a download URL without its archive extension
///
/// `https://host/1.0/foo-1.0.tar.gz?dl=1` gives `foo-1.0`.
pub fn archive_stem(url: &str) -> String {
    let file_name = url_file_name(url);
    split_extension(&file_name).0.to_string()
}

/// Where the archive for a release is stored in the download directory
pub fn archive_path(
    download_dir: &Path,
    software: &SoftwareName,
    version: &Version,
    url: &str,
) -> PathBuf {
    let file_name = format!("{}{}", release_name(software, version), url_extension(url));
    download_dir.join(file_name)
}

/// Staging directory an archive is extracted into before promotion
pub fn temp_install_path(
    install_dir: &Path,
    software: &SoftwareName,
    version: &Version,
) -> PathBuf {
    install_dir.join(format!("{}{}", TEMP_PREFIX, release_name(software, version)))
}

/// Final install directory of a release
///
/// Always the staging path with the `tmp-` prefix dropped.
pub fn install_path(install_dir: &Path, software: &SoftwareName, version: &Version) -> PathBuf {
    let temp = temp_install_path(install_dir, software, version);
    let name = temp
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix(TEMP_PREFIX))
        .map(str::to_string)
        .unwrap_or_else(|| release_name(software, version));
    temp.with_file_name(name)
}
