//! Integration tests for the software config store
//!
//! Tests cover:
//! - Loading the checked-in fixture config
//! - Add/remove round trips through the file on disk
//! - Duplicate and invalid additions leaving the file untouched

use packagerbuddy_core::{AddOutcome, ConfigStore, Error, SoftwareName, Version};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FOO_TEMPLATE: &str = "https://example.com/{version}/foo.zip";
const BAR_TEMPLATE: &str = "https://example.com/{version}/bar.zip";

fn fixture_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("config")
        .join("software.json")
}

/// Copy the fixture config into a scratch directory so tests may mutate it
fn scratch_store() -> (ConfigStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("software.json");
    fs::copy(fixture_config(), &path).unwrap();
    (ConfigStore::new(path), temp_dir)
}

#[test]
fn test_load_fixture() {
    let config = ConfigStore::new(fixture_config()).load().unwrap();

    assert_eq!(config.len(), 1);
    assert!(config.is_software_configured("foo"));
    assert!(!config.is_software_configured("bar"));

    let software = SoftwareName::parse("foo").unwrap();
    let template = config.template(&software).unwrap();
    assert_eq!(template.as_str(), FOO_TEMPLATE);
    assert_eq!(
        template.render(&Version::parse("0.1.0").unwrap()),
        "https://example.com/0.1.0/foo.zip"
    );
}

#[test]
fn test_add_existing_software_is_noop() {
    let (store, _temp) = scratch_store();
    let before = fs::read_to_string(store.path()).unwrap();
    let mut config = store.load().unwrap();

    let outcome = store
        .add_software(&mut config, "foo", "https://other.example/{version}/foo.tgz")
        .unwrap();

    assert_eq!(outcome, AddOutcome::AlreadyConfigured);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    let software = SoftwareName::parse("foo").unwrap();
    assert_eq!(config.template(&software).unwrap().as_str(), FOO_TEMPLATE);
}

#[test]
fn test_add_then_remove() {
    let (store, _temp) = scratch_store();
    let mut config = store.load().unwrap();

    store.add_software(&mut config, "bar", BAR_TEMPLATE).unwrap();
    assert!(store.load().unwrap().is_software_configured("bar"));

    store.remove_software(&mut config, "bar").unwrap();
    let reloaded = store.load().unwrap();
    assert!(!reloaded.is_software_configured("bar"));
    assert!(reloaded.is_software_configured("foo"));
}

#[test]
fn test_add_rejects_blank_software() {
    let (store, _temp) = scratch_store();
    let mut config = store.load().unwrap();

    let result = store.add_software(&mut config, "   ", BAR_TEMPLATE);
    assert!(matches!(result, Err(Error::Validation { .. })));
    assert_eq!(config.len(), 1);
}

#[test]
fn test_add_rejects_url_without_placeholder() {
    let (store, _temp) = scratch_store();
    let mut config = store.load().unwrap();

    let result = store.add_software(&mut config, "bar", "https://example.com/bar.zip");
    assert!(matches!(result, Err(Error::Validation { .. })));
    assert!(!store.load().unwrap().is_software_configured("bar"));
}

#[test]
fn test_corrupt_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("software.json");
    fs::write(&path, "{ not json").unwrap();

    let result = ConfigStore::new(path).load();
    assert!(matches!(result, Err(Error::JsonParse(_))));
}
