//! List command

use crate::cli::ListArgs;
use crate::output;
use anyhow::Result;
use packagerbuddy_core::{Settings, SoftwareName, Version};
use packagerbuddy_install::InstallCoordinator;

pub fn run(args: ListArgs, settings: &Settings) -> Result<()> {
    let software = args.software.as_deref().map(SoftwareName::parse).transpose()?;
    let version = args.version.as_deref().map(Version::parse).transpose()?;

    let coordinator = InstallCoordinator::from_settings(settings, false)?;
    for path in coordinator.list_installed(software.as_ref(), version.as_ref())? {
        output::path(&path);
    }
    Ok(())
}
