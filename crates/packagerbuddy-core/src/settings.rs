//! Directory roots and config file location
//!
//! `Settings` is built once at process entry and handed to every component.
//! Defaults live under `~/.packagerbuddy`; each location can be overridden
//! independently (the CLI wires `PB_CONFIG`, `PB_DOWNLOAD`, `PB_INSTALL` and
//! `PB_SCRIPTS` into the overrides).

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the base directory created in the user's home
pub const BASE_DIR_NAME: &str = ".packagerbuddy";

/// Get the user's home directory
///
/// Prefers the HOME environment variable over dirs::home_dir() so that a
/// relocated HOME (containers, test sandboxes) is respected.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }

    dirs::home_dir().ok_or_else(|| Error::validation("could not determine home directory"))
}

/// Expand `~` and make a path absolute relative to the working directory
pub fn normalize_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::tilde(&raw);
    Ok(std::path::absolute(Path::new(expanded.as_ref()))?)
}

/// Explicit locations that take precedence over the defaults
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub config_file: Option<PathBuf>,
    pub download_dir: Option<PathBuf>,
    pub install_dir: Option<PathBuf>,
    pub scripts_dir: Option<PathBuf>,
}

/// Resolved filesystem layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// JSON file mapping software names to URL templates
    pub config_file: PathBuf,

    /// Downloaded release archives
    pub download_dir: PathBuf,

    /// Installed releases and transient staging directories
    pub install_dir: PathBuf,

    /// Optional post-install scripts
    pub scripts_dir: PathBuf,
}

impl Settings {
    /// Default layout rooted at `base`
    pub fn from_base(base: &Path) -> Self {
        Self {
            config_file: base.join("config").join("software.json"),
            download_dir: base.join("source"),
            install_dir: base.join("installed"),
            scripts_dir: base.join("scripts"),
        }
    }

    /// Default layout under `~/.packagerbuddy` with overrides applied
    pub fn resolve(overrides: SettingsOverrides) -> Result<Self> {
        let base = get_home_dir()?.join(BASE_DIR_NAME);
        Self::from_base(&base).with_overrides(overrides)
    }

    /// Replace locations with normalized overrides where given
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Result<Self> {
        if let Some(path) = overrides.config_file {
            self.config_file = normalize_path(&path)?;
        }
        if let Some(path) = overrides.download_dir {
            self.download_dir = normalize_path(&path)?;
        }
        if let Some(path) = overrides.install_dir {
            self.install_dir = normalize_path(&path)?;
        }
        if let Some(path) = overrides.scripts_dir {
            self.scripts_dir = normalize_path(&path)?;
        }

        debug!("Resolved settings: {:?}", self);
        Ok(self)
    }

    /// Directories `setup` has to create, config directory first
    pub fn directories(&self) -> Vec<&Path> {
        let mut dirs = Vec::with_capacity(4);
        if let Some(config_dir) = self.config_file.parent() {
            dirs.push(config_dir);
        }
        dirs.push(self.download_dir.as_path());
        dirs.push(self.install_dir.as_path());
        dirs.push(self.scripts_dir.as_path());
        dirs
    }
}
