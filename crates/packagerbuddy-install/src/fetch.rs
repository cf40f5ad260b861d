//! HTTP transport for release archives
//!
//! A single unauthenticated GET per download, streamed into the caller's
//! sink. No retries; redirects follow reqwest's default policy.

use async_trait::async_trait;
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use packagerbuddy_core::{Error, Result};
use reqwest::header::CONTENT_LENGTH;
use std::io::Write;
use tracing::debug;

/// Transport used by the archive store to retrieve a URL
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Write the full response body of `url` into `sink`
    ///
    /// Returns the number of bytes written.
    async fn fetch(&self, url: &str, sink: &mut (dyn Write + Send)) -> Result<u64>;
}

/// reqwest-backed fetcher with an optional progress bar
pub struct HttpFetcher {
    client: reqwest::Client,
    show_progress: bool,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("packagerbuddy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::download("<client>", e.to_string()))?;

        Ok(Self {
            client,
            show_progress: false,
        })
    }

    /// Enable or disable progress bars
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    fn progress_bar(&self, total: Option<u64>, url: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = match total {
            Some(len) => {
                let pb = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::default_bar().template(
                    "{msg}\n[{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
                ) {
                    pb.set_style(style.progress_chars("#>-"));
                }
                pb
            }
            None => ProgressBar::new_spinner(),
        };
        pb.set_message(format!("Downloading {}", url));
        Some(pb)
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str, sink: &mut (dyn Write + Send)) -> Result<u64> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::download(url, e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::download(
                url,
                format!("server responded with status {}", response.status()),
            ));
        }

        let total = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|len| len.to_str().ok())
            .and_then(|len| len.parse::<u64>().ok());
        let progress = self.progress_bar(total, url);

        let mut downloaded = 0u64;
        let mut stream = response.bytes_stream();

        while let Some(chunk_result) = stream.next().await {
            let chunk: bytes::Bytes =
                chunk_result.map_err(|e| Error::download(url, e.to_string()))?;
            sink.write_all(&chunk)?;

            downloaded += chunk.len() as u64;
            if let Some(pb) = &progress {
                pb.set_position(downloaded);
            }
        }
        sink.flush()?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        debug!("Received {} bytes from {}", downloaded, url);
        Ok(downloaded)
    }
}
