//! Sandboxed filesystem layout and config helpers

use packagerbuddy_core::{Config, Settings, SoftwareName, UrlTemplate, Version};
use packagerbuddy_install::{ArchiveStore, Extract, Fetch, InstallCoordinator};
use std::sync::Arc;
use tempfile::TempDir;

/// Default PackagerBuddy layout rooted in a temporary directory
pub struct Sandbox {
    pub settings: Settings,
    _temp: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let settings = Settings::from_base(temp.path());
        Self {
            settings,
            _temp: temp,
        }
    }

    /// Coordinator over this sandbox using the given seams
    pub fn coordinator(
        &self,
        fetcher: Arc<dyn Fetch>,
        extractor: Arc<dyn Extract>,
    ) -> InstallCoordinator {
        let store = ArchiveStore::new(&self.settings.download_dir, fetcher);
        InstallCoordinator::new(&self.settings.install_dir, store, extractor)
    }
}

/// Config built from `(software, template)` pairs
pub fn config_with(entries: &[(&str, &str)]) -> Config {
    entries
        .iter()
        .map(|(software, template)| {
            (
                SoftwareName::parse(software).unwrap(),
                UrlTemplate::parse(template).unwrap(),
            )
        })
        .collect()
}

pub fn software(name: &str) -> SoftwareName {
    SoftwareName::parse(name).unwrap()
}

pub fn version(raw: &str) -> Version {
    Version::parse(raw).unwrap()
}
