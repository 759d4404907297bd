//! Core downloader implementation.
//!
//! A [`Downloader`] runs each [`DownloadRequest`] through the same stages:
//!
//! 1. remove whatever a previous attempt left at the destination,
//! 2. probe the resource,
//! 3. plan the segments,
//! 4. fetch every segment concurrently and wait for all of them,
//! 5. assemble and verify the file.
//!
//! Nothing is retried. When a segment fails, the remaining fetches still run
//! to completion, the error of the lowest failed index is returned and no file
//! is written.
//!
//! # Examples
//!
//! ```rust,no_run
//! use splinter::{DownloadRequest, DownloaderBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new().build()?;
//! let request = DownloadRequest::try_from("https://example.com/go1.22.0.linux-amd64.tar.gz")?
//!     .with_directory("archive");
//!
//! match downloader.run(&request).await {
//!     Ok(summary) => println!("{} bytes in {} segments", summary.size(), summary.segments()),
//!     Err(e) if e.is_invalid_source() => eprintln!("no such release: {}", e),
//!     Err(e) => eprintln!("download failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```

use super::config::DownloaderConfig;
use crate::download::{DownloadRequest, Summary};
use crate::error::{Error, Result};
use crate::http::{probe, Transport};
use crate::progress::ProgressDisplay;
use crate::segment::{assemble, fetch_segment, plan, SegmentResult, Transfer};

use futures::stream::{self, StreamExt};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::ClientWithMiddleware;
use std::fmt;
use std::fmt::Debug;
use std::io;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// Represents the download controller.
///
/// A downloader can be created via its builder:
///
/// ```rust
/// # fn main() -> Result<(), splinter::Error> {
/// use splinter::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Downloader<T = ClientWithMiddleware> {
    config: DownloaderConfig,
    transport: T,
}

impl<T> Debug for Downloader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.config)
            .finish()
    }
}

impl<T: Transport> Downloader<T> {
    /// Creates a new Downloader with the given configuration.
    pub(crate) fn new(config: DownloaderConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Gets the downloader configuration.
    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Gets the transport requests are issued through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs several downloads one after another.
    ///
    /// Each request is fetched with its own segment concurrency; a failed
    /// request does not stop the following ones.
    pub async fn download(&self, requests: &[DownloadRequest]) -> Vec<Result<Summary>> {
        let mut outcomes = Vec::with_capacity(requests.len());
        for request in requests {
            outcomes.push(self.run(request).await);
        }
        outcomes
    }

    /// Downloads a single file.
    pub async fn run(&self, request: &DownloadRequest) -> Result<Summary> {
        let outcome = self.run_inner(request).await;
        match &outcome {
            Ok(summary) => info!(
                url = %request.url,
                size = summary.size(),
                segments = summary.segments(),
                "Download succeeded"
            ),
            Err(e) => warn!(url = %request.url, "Download failed: {}", e),
        }
        outcome
    }

    async fn run_inner(&self, request: &DownloadRequest) -> Result<Summary> {
        let output = request.path();
        remove_stale_file(&output).await?;

        let headers = self.request_headers(request)?;

        debug!("Probing {}", &request.url);
        let metadata = probe(&self.transport, &request.url, &headers).await?;

        let segments = plan(
            metadata.total_size.unwrap_or_default(),
            request.parts,
            metadata.range_supported,
        );
        let transfer = if segments.len() > 1 {
            Transfer::Ranged
        } else {
            Transfer::Whole
        };
        debug!(
            segments = segments.len(),
            ?transfer,
            "Planned {:?} bytes",
            metadata.total_size
        );

        let display = ProgressDisplay::new(self.config.style_options.clone(), segments.len());
        let results = {
            let display = &display;
            let headers = &headers;
            let url = &request.url;
            let transport = &self.transport;
            let size_hint = metadata.total_size.unwrap_or_default();

            stream::iter(segments.iter().copied())
                .map(move |segment| {
                    let len = match transfer {
                        Transfer::Ranged => segment.len(),
                        Transfer::Whole => size_hint,
                    };
                    let pb = display.create_segment_progress(&segment, len);
                    async move {
                        let result =
                            fetch_segment(transport, url, headers, segment, transfer, &pb).await;
                        display.finish_segment(pb);
                        result
                    }
                })
                .buffered(segments.len())
                .collect::<Vec<Result<SegmentResult>>>()
                .await
        };
        display.finish();

        // Every fetch has reported; the lowest failed index wins.
        let results = results.into_iter().collect::<Result<Vec<_>>>()?;

        let expected_size = metadata
            .total_size
            .unwrap_or_else(|| results.iter().map(SegmentResult::size).sum());
        let assembled = assemble(
            results,
            expected_size,
            &output,
            request.checksum.as_deref(),
        )
        .await?;

        Ok(Summary::from_assembled(
            request.clone(),
            assembled,
            segments.len(),
        ))
    }

    /// Headers sent with every request of `request`.
    fn request_headers(&self, request: &DownloadRequest) -> Result<HeaderMap> {
        let mut headers = self.config.headers.clone().unwrap_or_default();
        let user_agent = HeaderValue::from_str(&request.user_agent).map_err(|e| {
            Error::Internal(format!("invalid user agent {:?}: {}", request.user_agent, e))
        })?;
        headers.insert(USER_AGENT, user_agent);
        Ok(headers)
    }
}

/// Remove a file left at `path` by an earlier attempt.
async fn remove_stale_file(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => {
            debug!("Removed stale file {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::StaleFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}
