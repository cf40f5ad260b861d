//! Setup command

use crate::output;
use anyhow::{Context, Result};
use packagerbuddy_core::{ConfigStore, Settings};
use std::fs;

/// Create the directory layout and an empty config; safe to re-run
pub fn run(settings: &Settings) -> Result<()> {
    for dir in settings.directories() {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            output::info(&format!("created directory {}", dir.display()));
        }
    }

    let store = ConfigStore::new(&settings.config_file);
    if store.initialize()? {
        output::info(&format!("created file {}", store.path().display()));
    }

    Ok(())
}
