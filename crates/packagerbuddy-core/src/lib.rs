//! # packagerbuddy-core
//!
//! Core library for PackagerBuddy providing:
//! - Settings (config file, download, install and scripts locations)
//! - The JSON software config and its on-disk store
//! - Validated software/version/URL template types
//! - Canonical archive, staging and install path naming
//! - The shared error taxonomy

pub mod config;
pub mod error;
pub mod paths;
pub mod settings;
pub mod types;

pub use config::{AddOutcome, Config, ConfigStore};
pub use error::{Error, Result};
pub use settings::{Settings, SettingsOverrides};
pub use types::{SoftwareName, UrlTemplate, Version};
