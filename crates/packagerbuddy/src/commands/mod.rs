//! CLI command implementations

pub mod add;
pub mod avail;
pub mod download;
pub mod install;
pub mod list;
pub mod remove;
pub mod setup;
pub mod uninstall;

use anyhow::{Context, Result};
use packagerbuddy_core::{Config, ConfigStore, Settings, SoftwareName, Version};

/// Load the software config named by the settings
pub(crate) fn load_config(settings: &Settings) -> Result<(ConfigStore, Config)> {
    let store = ConfigStore::new(&settings.config_file);
    let config = store
        .load()
        .with_context(|| format!("Failed to load {}", settings.config_file.display()))?;
    Ok((store, config))
}

/// Validate a `(software, version)` pair given on the command line
pub(crate) fn parse_release(software: &str, version: &str) -> Result<(SoftwareName, Version)> {
    Ok((SoftwareName::parse(software)?, Version::parse(version)?))
}
