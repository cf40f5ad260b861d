//! Add command

use super::load_config;
use crate::cli::AddArgs;
use crate::output;
use anyhow::Result;
use packagerbuddy_core::{AddOutcome, Settings};

pub fn run(args: AddArgs, settings: &Settings) -> Result<()> {
    let (store, mut config) = load_config(settings)?;

    match store.add_software(&mut config, &args.software, &args.url)? {
        AddOutcome::Added => output::success(&format!("added {}", args.software.trim())),
        AddOutcome::AlreadyConfigured => {
            output::warning(&format!("{} is already configured", args.software.trim()))
        }
    }
    Ok(())
}
