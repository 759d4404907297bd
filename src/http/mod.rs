//! HTTP module containing the network-facing parts of a download.
//!
//! - [`client`] - HTTP client creation and middleware configuration
//! - [`transport`] - The [`Transport`] trait the pipeline issues requests through
//! - [`probe`] - The `HEAD` request that discovers size and range support
//!
//! # Examples
//!
//! ```rust,no_run
//! use splinter::http::{create_http_client, probe, HttpClientConfig};
//! use reqwest::{header::HeaderMap, Url};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_http_client(HttpClientConfig::default())?;
//! let url = Url::parse("https://storage.googleapis.com/golang/go1.22.0.linux-amd64.tar.gz")?;
//! let metadata = probe(&client, &url, &HeaderMap::new()).await?;
//! println!("{:?} bytes, ranges: {}", metadata.total_size, metadata.range_supported);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod probe;
pub mod transport;

pub use client::{create_http_client, HttpClientConfig};
pub use probe::{probe, ResourceMetadata};
pub use transport::Transport;
