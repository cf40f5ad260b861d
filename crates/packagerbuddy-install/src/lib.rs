//! Install pipeline for PackagerBuddy
//!
//! This crate turns a configured `(software, version)` pair into an
//! installed directory:
//! - Archive discovery and download ([`ArchiveStore`], [`Fetch`])
//! - Format-dispatched extraction ([`ArchiveExtractor`])
//! - Staging and promotion into the install root ([`InstallCoordinator`])
//! - Post-install hook scripts ([`ScriptRunner`])

pub mod coordinator;
pub mod extract;
pub mod fetch;
pub mod lock;
pub mod scripts;
pub mod store;

pub use coordinator::{InstallCoordinator, InstallOutcome};
pub use extract::{ArchiveExtractor, ArchiveKind, Extract};
pub use fetch::{Fetch, HttpFetcher};
pub use lock::InstallLock;
pub use scripts::{ScriptOutput, ScriptRunner};
pub use store::ArchiveStore;
