//! Download command

use super::{load_config, parse_release};
use crate::cli::ReleaseArgs;
use crate::output;
use anyhow::Result;
use packagerbuddy_core::Settings;
use packagerbuddy_install::InstallCoordinator;

/// Fetch (or reuse) the archive of a release and print its path
pub async fn run(args: ReleaseArgs, settings: &Settings, quiet: bool) -> Result<()> {
    let (software, version) = parse_release(&args.software, &args.version)?;
    let (_, config) = load_config(settings)?;

    let coordinator = InstallCoordinator::from_settings(settings, !quiet)?;
    let (archive, _) = coordinator
        .store()
        .find_or_download(&software, &version, &config)
        .await?;

    output::path(&archive);
    Ok(())
}
