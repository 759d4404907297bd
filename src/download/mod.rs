//! Download module containing the types at both ends of a download.
//!
//! - [`request`] - The [`DownloadRequest`] describing what to fetch and where to put it
//! - [`summary`] - The [`Summary`] of a completed download
//! - [`checksum`] - SHA-256 helpers used to verify the written file
//!
//! # Examples
//!
//! ```rust
//! use splinter::download::DownloadRequest;
//! use reqwest::Url;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let url = Url::parse("https://example.com/download?id=1")?;
//! let request = DownloadRequest::new(&url, "/tmp/archive", "custom-name.tar.gz")
//!     .with_user_agent("go-version-manager")
//!     .with_checksum("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod request;
pub mod summary;

pub use request::DownloadRequest;
pub use summary::Summary;
