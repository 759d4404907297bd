//! The input of a download.
//!
//! # Examples
//!
//! ```rust
//! use splinter::DownloadRequest;
//! use std::convert::TryFrom;
//!
//! // The file name is extracted from the URL.
//! let request = DownloadRequest::try_from("https://example.com/go1.22.0.linux-amd64.tar.gz")?
//!     .with_directory("archive")
//!     .with_parts(4);
//! assert_eq!(request.filename, "go1.22.0.linux-amd64.tar.gz");
//! assert_eq!(request.path(), std::path::Path::new("archive/go1.22.0.linux-amd64.tar.gz"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::Error;
use crate::segment::plan::MAX_PARTS;

use reqwest::Url;
use std::convert::TryFrom;
use std::env::current_dir;
use std::path::PathBuf;

/// Represents a file to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// URL of the file to download.
    pub url: Url,
    /// Directory the file is written to.
    pub directory: PathBuf,
    /// File name used to save the file on disk.
    pub filename: String,
    /// Number of segments to fetch concurrently, between 1 and
    /// [`MAX_PARTS`](crate::segment::plan::MAX_PARTS).
    pub parts: usize,
    /// `User-Agent` sent with every request of this download.
    pub user_agent: String,
    /// Expected lowercase hex SHA-256 of the file, if known.
    pub checksum: Option<String>,
}

impl DownloadRequest {
    /// Segment count used when none is given.
    pub const DEFAULT_PARTS: usize = 10;
    /// `User-Agent` used when none is given.
    pub const DEFAULT_USER_AGENT: &'static str = concat!("splinter/", env!("CARGO_PKG_VERSION"));

    /// Creates a new [`DownloadRequest`].
    ///
    /// When using the [`DownloadRequest::try_from`] method, the file name is
    /// automatically extracted from the URL and the current directory is
    /// used as destination.
    pub fn new(url: &Url, directory: impl Into<PathBuf>, filename: &str) -> Self {
        Self {
            url: url.clone(),
            directory: directory.into(),
            filename: String::from(filename),
            parts: Self::DEFAULT_PARTS,
            user_agent: String::from(Self::DEFAULT_USER_AGENT),
            checksum: None,
        }
    }

    /// Set the destination directory.
    pub fn with_directory(self, directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..self
        }
    }

    /// Set the number of segments, clamped to `1..=MAX_PARTS`.
    pub fn with_parts(self, parts: usize) -> Self {
        Self {
            parts: parts.clamp(1, MAX_PARTS),
            ..self
        }
    }

    /// Set the `User-Agent` header value.
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..self
        }
    }

    /// Set the expected SHA-256 of the downloaded file.
    pub fn with_checksum(self, checksum: impl Into<String>) -> Self {
        Self {
            checksum: Some(checksum.into()),
            ..self
        }
    }

    /// Full path of the destination file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

impl TryFrom<&Url> for DownloadRequest {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        let filename = value
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "The url \"{}\" does not contain a valid path",
                    value
                ))
            })?
            .next_back()
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                form_urlencoded::parse(segment.as_bytes())
                    .map(|(key, val)| [key, val].concat())
                    .collect::<String>()
            })
            .ok_or_else(|| {
                Error::InvalidUrl(format!("The url \"{}\" does not contain a filename", value))
            })?;

        Ok(DownloadRequest::new(
            value,
            current_dir().unwrap_or_default(),
            &filename,
        ))
    }
}

impl TryFrom<&str> for DownloadRequest {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| DownloadRequest::try_from(&u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let url = Url::parse("https://example.com/file.zip").unwrap();
        let request = DownloadRequest::new(&url, "out", "file.zip");
        assert_eq!(request.parts, 10);
        assert!(request.user_agent.starts_with("splinter/"));
        assert!(request.checksum.is_none());
        assert_eq!(request.path(), PathBuf::from("out/file.zip"));
    }

    #[test]
    fn test_parts_are_at_least_one() {
        let request = DownloadRequest::try_from("https://example.com/file.zip")
            .unwrap()
            .with_parts(0);
        assert_eq!(request.parts, 1);
    }

    #[test]
    fn test_parts_are_capped() {
        let request = DownloadRequest::try_from("https://example.com/file.zip")
            .unwrap()
            .with_parts(usize::MAX);
        assert_eq!(request.parts, MAX_PARTS);
    }

    #[test]
    fn test_url_without_filename() {
        assert!(matches!(
            DownloadRequest::try_from("https://example.com/"),
            Err(Error::InvalidUrl(_))
        ));
    }
}
