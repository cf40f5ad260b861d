//! Counting fakes for the fetch and extract seams
//!
//! Both record their invocations so tests can assert that an idempotent
//! re-run performs no network or extraction work.

#![allow(dead_code)]

use async_trait::async_trait;
use packagerbuddy_core::{Error, Result};
use packagerbuddy_install::{ArchiveExtractor, Extract, Fetch};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Fetcher serving a fixed body and recording requested URLs
#[derive(Debug, Default)]
pub struct CountingFetcher {
    body: Vec<u8>,
    fail: bool,
    urls: Arc<Mutex<Vec<String>>>,
}

impl CountingFetcher {
    pub fn serving(body: Vec<u8>) -> Self {
        Self {
            body,
            ..Self::default()
        }
    }

    /// Fetcher whose every request fails like an unreachable host
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.urls.lock().unwrap().len()
    }
}

#[async_trait]
impl Fetch for CountingFetcher {
    async fn fetch(&self, url: &str, sink: &mut (dyn Write + Send)) -> Result<u64> {
        self.urls.lock().unwrap().push(url.to_string());
        if self.fail {
            return Err(Error::download(url, "connection refused"));
        }
        sink.write_all(&self.body)?;
        Ok(self.body.len() as u64)
    }
}

/// Real extractor wrapped with an invocation log
#[derive(Debug, Default)]
pub struct CountingExtractor {
    inner: ArchiveExtractor,
    calls: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
}

impl CountingExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Extract for CountingExtractor {
    fn unarchive(&self, archive: &Path, target: &Path) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((archive.to_path_buf(), target.to_path_buf()));
        self.inner.unarchive(archive, target)
    }
}
