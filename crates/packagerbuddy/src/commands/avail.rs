//! Avail command

use super::load_config;
use crate::output;
use anyhow::Result;
use packagerbuddy_core::Settings;

pub fn run(settings: &Settings) -> Result<()> {
    let (_, config) = load_config(settings)?;
    for software in config.software_names() {
        output::result(software);
    }
    Ok(())
}
