//! Downloader module containing the coordinator, its builder and configuration.
//!
//! - `downloader` - The [`Downloader`] running probe, plan, fetch and assembly
//! - `builder` - [`DownloaderBuilder`] for flexible configuration using the builder pattern
//! - `config` - [`DownloaderConfig`] with its defaults
//!
//! # Examples
//!
//! ```rust,no_run
//! use splinter::downloader::DownloaderBuilder;
//! use splinter::DownloadRequest;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::hidden().build()?;
//! let requests = vec![
//!     DownloadRequest::try_from("https://example.com/go1.21.0.linux-amd64.tar.gz")?,
//!     DownloadRequest::try_from("https://example.com/go1.22.0.linux-amd64.tar.gz")?,
//! ];
//! for outcome in downloader.download(&requests).await {
//!     match outcome {
//!         Ok(summary) => println!("{:?}: {}", summary.path(), summary.sha256()),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
#[allow(clippy::module_inception)]
pub mod downloader;

pub use builder::DownloaderBuilder;
pub use config::DownloaderConfig;
pub use downloader::Downloader;
