//! Software config: a JSON object mapping software names to URL templates
//!
//! The file is read in full at the start of every invocation and rewritten
//! in full after every mutation. `{}` is the bootstrap state.

use crate::error::{Error, Result};
use crate::types::{SoftwareName, UrlTemplate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// In-memory software config
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    software: BTreeMap<String, UrlTemplate>,
}

impl Config {
    pub fn is_software_configured(&self, software: &str) -> bool {
        self.software.contains_key(software)
    }

    /// URL template of a configured software
    pub fn template(&self, software: &SoftwareName) -> Option<&UrlTemplate> {
        self.software.get(software.as_str())
    }

    /// Same as [`Config::template`] but absence is an error
    pub fn require_template(&self, software: &SoftwareName) -> Result<&UrlTemplate> {
        self.template(software)
            .ok_or_else(|| Error::not_configured(software.as_str()))
    }

    /// Configured software names, sorted
    pub fn software_names(&self) -> impl Iterator<Item = &str> {
        self.software.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.software.len()
    }

    pub fn is_empty(&self) -> bool {
        self.software.is_empty()
    }
}

impl FromIterator<(SoftwareName, UrlTemplate)> for Config {
    fn from_iter<I: IntoIterator<Item = (SoftwareName, UrlTemplate)>>(iter: I) -> Self {
        Self {
            software: iter
                .into_iter()
                .map(|(name, template)| (name.as_str().to_string(), template))
                .collect(),
        }
    }
}

/// Result of adding a software entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyConfigured,
}

/// Persistent storage of the software config
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the config; a missing file reads as an empty config
    pub fn load(&self) -> Result<Config> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using empty config", self.path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&content)?)
    }

    /// Rewrite the config file in full
    pub fn dump(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = serde_json::to_string_pretty(config)?;
        content.push('\n');
        fs::write(&self.path, content)?;
        debug!("Wrote {} entries to {}", config.len(), self.path.display());
        Ok(())
    }

    /// Write an empty config unless one already exists
    ///
    /// Returns whether a file was created.
    pub fn initialize(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.dump(&Config::default())?;
        Ok(true)
    }

    /// Add a software entry and persist the config
    ///
    /// The software name and template are validated before anything is
    /// stored. An existing entry is left untouched.
    pub fn add_software(
        &self,
        config: &mut Config,
        software: &str,
        url: &str,
    ) -> Result<AddOutcome> {
        let software = SoftwareName::parse(software)?;
        if config.is_software_configured(software.as_str()) {
            return Ok(AddOutcome::AlreadyConfigured);
        }

        let template = UrlTemplate::parse(url)?;
        config
            .software
            .insert(software.as_str().to_string(), template);
        self.dump(config)?;

        info!("Added software {}", software);
        Ok(AddOutcome::Added)
    }

    /// Remove a software entry and persist the config
    pub fn remove_software(&self, config: &mut Config, software: &str) -> Result<()> {
        let software = SoftwareName::parse(software)?;
        if config.software.remove(software.as_str()).is_none() {
            return Err(Error::not_configured(software.as_str()));
        }
        self.dump(config)?;

        info!("Removed software {}", software);
        Ok(())
    }
}
