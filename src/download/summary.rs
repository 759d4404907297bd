//! Download summary.
//!
//! A [`Summary`] is only produced for a download that finished and passed
//! verification; failures are reported through [`crate::Error`].

use super::request::DownloadRequest;
use crate::segment::Assembled;

use std::path::{Path, PathBuf};

/// Represents a completed [`DownloadRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The request that was fulfilled.
    request: DownloadRequest,
    /// Path of the written file.
    path: PathBuf,
    /// File size in bytes.
    size: u64,
    /// Lowercase hex SHA-256 of the file.
    sha256: String,
    /// Number of segments the file was fetched in.
    segments: usize,
}

impl Summary {
    /// Create a new [`Summary`].
    pub fn new(
        request: DownloadRequest,
        path: PathBuf,
        size: u64,
        sha256: String,
        segments: usize,
    ) -> Self {
        Self {
            request,
            path,
            size,
            sha256,
            segments,
        }
    }

    pub(crate) fn from_assembled(
        request: DownloadRequest,
        assembled: Assembled,
        segments: usize,
    ) -> Self {
        Self::new(
            request,
            assembled.path,
            assembled.size,
            assembled.sha256,
            segments,
        )
    }

    /// Get a reference to the summary's request.
    pub fn request(&self) -> &DownloadRequest {
        &self.request
    }

    /// Get the path of the written file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the summary's size.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Get the SHA-256 of the written file.
    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    /// Get the number of segments.
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Whether the file was fetched with range requests.
    pub fn ranged(&self) -> bool {
        self.segments > 1
    }
}
