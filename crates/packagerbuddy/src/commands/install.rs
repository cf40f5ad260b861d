//! Install command

use super::{load_config, parse_release};
use crate::cli::InstallArgs;
use crate::output;
use anyhow::{Context, Result};
use packagerbuddy_core::{Settings, SoftwareName, Version};
use packagerbuddy_install::{InstallCoordinator, InstallOutcome, ScriptRunner};
use std::path::Path;
use tracing::debug;

pub async fn run(args: InstallArgs, settings: &Settings, quiet: bool) -> Result<()> {
    let (software, version) = parse_release(&args.release.software, &args.release.version)?;
    let (_, config) = load_config(settings)?;

    let coordinator = InstallCoordinator::from_settings(settings, !quiet)?;

    let outcome = if args.force {
        coordinator.reinstall(&software, &version, &config).await
    } else {
        coordinator.install(&software, &version, &config).await
    }
    .with_context(|| format!("Failed to install {} {}", software, version))?;

    match &outcome {
        InstallOutcome::Installed(path) if !args.no_scripts => {
            run_scripts(settings, &software, &version, path, quiet).await?;
        }
        InstallOutcome::Installed(_) => debug!("Skipping post-install scripts"),
        InstallOutcome::AlreadyInstalled(_) if !quiet => {
            output::info(&format!("{} {} is already installed", software, version));
        }
        InstallOutcome::AlreadyInstalled(_) => {}
    }

    output::path(outcome.path());
    Ok(())
}

/// Run post-install scripts from the install directory, in order
async fn run_scripts(
    settings: &Settings,
    software: &SoftwareName,
    version: &Version,
    install_path: &Path,
    quiet: bool,
) -> Result<()> {
    let runner = ScriptRunner::new(&settings.scripts_dir);

    for script in runner.find_scripts(software, version)? {
        let spinner = output::spinner(&format!("running {}", script.display()), quiet);
        let result = runner
            .run_script(&script, software, version, install_path)
            .await;
        spinner.finish_and_clear();

        let script_output = result?;
        debug!("{} stdout: {}", script.display(), script_output.stdout.trim_end());
        if !quiet {
            output::success(&format!("ran {}", script.display()));
        }
    }
    Ok(())
}
