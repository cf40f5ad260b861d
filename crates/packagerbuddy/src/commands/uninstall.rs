//! Uninstall command

use super::load_config;
use crate::cli::UninstallArgs;
use crate::output;
use anyhow::{bail, Result};
use packagerbuddy_core::{Config, Settings, SoftwareName, Version};
use packagerbuddy_install::InstallCoordinator;
use std::path::{Path, PathBuf};

/// Remove one or every installed version of a software
pub fn run(args: UninstallArgs, settings: &Settings) -> Result<()> {
    let software = SoftwareName::parse(&args.software)?;
    let version = args.version.as_deref().map(Version::parse).transpose()?;
    let (_, config) = load_config(settings)?;

    let coordinator = InstallCoordinator::from_settings(settings, false)?;
    let installed = coordinator.list_installed(Some(&software), version.as_ref())?;
    let installed = owned_by(installed, &software, &config);

    if installed.is_empty() {
        match version {
            Some(version) => bail!("{} {} is not installed", software, version),
            None => bail!("{} is not installed", software),
        }
    }

    for path in installed {
        if !args.dry_run {
            coordinator.uninstall(&path)?;
        }
        output::path(&path);
    }
    Ok(())
}

/// Drop installs that belong to a longer configured name sharing the prefix
///
/// `foo-*` also matches `foo-bar-1.0`; when `foo-bar` is configured, that
/// directory is left alone.
fn owned_by(installed: Vec<PathBuf>, software: &SoftwareName, config: &Config) -> Vec<PathBuf> {
    let prefix = format!("{}-", software);
    let longer: Vec<String> = config
        .software_names()
        .filter(|name| name.starts_with(&prefix))
        .map(|name| format!("{}-", name))
        .collect();

    installed
        .into_iter()
        .filter(|path| !file_name_starts_with_any(path, &longer))
        .collect()
}

fn file_name_starts_with_any(path: &Path, prefixes: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| prefixes.iter().any(|prefix| name.starts_with(prefix)))
}
