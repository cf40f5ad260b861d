//! Remove command

use super::load_config;
use crate::cli::RemoveArgs;
use crate::output;
use anyhow::Result;
use packagerbuddy_core::Settings;

pub fn run(args: RemoveArgs, settings: &Settings) -> Result<()> {
    let (store, mut config) = load_config(settings)?;
    store.remove_software(&mut config, &args.software)?;
    output::success(&format!("removed {}", args.software.trim()));
    Ok(())
}
