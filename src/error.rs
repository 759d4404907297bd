//! Error handling for the Splinter library.
//!
//! Every stage of a download reports failures through the single [`Error`]
//! enum. Stage-specific variants carry the context needed to produce an
//! actionable message: the URL for the probe, the segment index and byte range
//! for a fetch, the destination path for assembly.

use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using Splinter.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Also used for broken internal invariants, such as a set of segment
    /// results that does not cover every planned index.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A release version that cannot be turned into an archive name.
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    /// The host operating system has no published release archives.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// The metadata request could not be performed.
    #[error("probe of {url} failed")]
    ProbeTransport {
        url: String,
        #[source]
        source: reqwest_middleware::Error,
    },

    /// The metadata request was answered with a non-success status.
    #[error("probe of {url} failed with status {status}")]
    Probe { url: String, status: StatusCode },

    /// The server claims range support but does not say how large the resource is.
    #[error("probe of {url} reported byte-range support without a usable Content-Length")]
    UnknownLength { url: String },

    /// The server does not know the requested resource.
    ///
    /// This usually means a wrong version or a mistyped URL rather than a
    /// transient network issue.
    #[error("invalid source {url}: server answered {status}")]
    InvalidSource { url: String, status: StatusCode },

    /// A segment request was answered with a non-success status.
    #[error("segment {index} (bytes {start}-{end}) failed with status {status}")]
    SegmentStatus {
        index: usize,
        start: u64,
        end: u64,
        status: StatusCode,
    },

    /// A segment body did not have the requested length.
    #[error("segment {index} (bytes {start}-{end}) expected {expected} bytes, received {received}")]
    SegmentLength {
        index: usize,
        start: u64,
        end: u64,
        expected: u64,
        received: u64,
    },

    /// A segment request or its body transfer failed.
    #[error("segment {index} (bytes {start}-{end}) transfer failed")]
    SegmentTransport {
        index: usize,
        start: u64,
        end: u64,
        #[source]
        source: reqwest_middleware::Error,
    },

    /// A file left at the destination by an earlier attempt could not be removed.
    #[error("removing stale file {path:?} failed: {source}")]
    StaleFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the destination file failed.
    #[error("assembling {path:?} failed")]
    Assemble {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The assembled file does not have the probed size.
    #[error("incomplete file {path:?}: wrote {written} of {expected} bytes")]
    IncompleteFile {
        path: PathBuf,
        expected: u64,
        written: u64,
    },

    /// The assembled file does not have the expected SHA-256 digest.
    #[error("checksum mismatch for {path:?}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// I/O Error.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },
}

impl Error {
    /// Returns `true` when the server reported the resource as missing.
    pub fn is_invalid_source(&self) -> bool {
        matches!(self, Error::InvalidSource { .. })
    }

    /// Returns `true` when bytes arrived but not the right ones: a segment
    /// of the wrong length, or an assembled file of the wrong size or digest.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            Error::SegmentLength { .. }
                | Error::IncompleteFile { .. }
                | Error::ChecksumMismatch { .. }
        )
    }
}

/// Result type alias for operations that can fail with a Splinter error.
pub type Result<T> = std::result::Result<T, Error>;
