//! Common test infrastructure for packagerbuddy-install tests
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: Software names, versions, URL templates
//! - `builders`: Archive builders producing tar, tar.gz, tar.bz2 and zip bytes
//! - `mocks`: Counting fetcher and extractor fakes
//! - `fixtures`: Sandboxed settings and config helpers
//! - `mock_server`: Wiremock setup helpers for download tests

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;
pub mod constants;
pub mod fixtures;
pub mod mock_server;
pub mod mocks;

pub use builders::*;
pub use constants::*;
pub use fixtures::*;
pub use mock_server::*;
pub use mocks::*;
