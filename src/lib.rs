//! Splinter downloads a single large file over HTTP(S), splitting it into
//! byte-range segments fetched concurrently when the server allows it.
//!
//! A download runs through a fixed pipeline: a `HEAD` probe learns the size of
//! the resource and whether it accepts range requests, the planner partitions
//! the byte range, one fetch per segment runs concurrently, and the assembler
//! writes the segments back in order and checks that the result is complete.
//! Servers without range support get a single whole-file transfer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use splinter::{DownloadRequest, DownloaderBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let url = "https://storage.googleapis.com/golang/go1.22.0.linux-amd64.tar.gz";
//! let request = DownloadRequest::try_from(url)?
//!     .with_directory("archive")
//!     .with_parts(8);
//! let downloader = DownloaderBuilder::new().build()?;
//! let summary = downloader.run(&request).await?;
//! println!("{} bytes written to {:?}", summary.size(), summary.path());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`download`] - The `DownloadRequest` input, the `Summary` output and checksum helpers
//! - [`downloader`] - The `Downloader` coordinator and its builder
//! - [`segment`] - Segment planning, fetching and assembly
//! - [`http`] - HTTP client setup, the `Transport` seam and the range probe
//! - [`progress`] - Progress bar styling and display management
//! - [`release`] - Go release archive names and on-disk layout
//! - [`utils`] - Response header parsing
//! - [`error`] - Centralized error handling with the `Error` enum

pub mod download;
pub mod downloader;
pub mod error;
pub mod http;
pub mod progress;
pub mod release;
pub mod segment;
pub mod utils;

pub use download::{DownloadRequest, Summary};
pub use downloader::{Downloader, DownloaderBuilder};
pub use error::{Error, Result};
pub use http::{create_http_client, probe, HttpClientConfig, ResourceMetadata, Transport};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use release::{Layout, Release};
pub use segment::{assemble, fetch_segment, plan, Segment, SegmentResult, Transfer};
