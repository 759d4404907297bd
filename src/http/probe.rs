//! Range probing.
//!
//! Before any bytes are transferred, a single `HEAD` request tells the
//! downloader how large the resource is and whether the server accepts
//! byte-range requests.

use super::transport::Transport;
use crate::error::{Error, Result};
use crate::utils::{accepts_byte_ranges, content_length};

use reqwest::{header::HeaderMap, Url};
use tracing::debug;

/// What the probe learned about the remote resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMetadata {
    /// Size announced by `Content-Length`, if the server sent a usable one.
    pub total_size: Option<u64>,
    /// Whether `Accept-Ranges: bytes` was announced.
    pub range_supported: bool,
}

/// Probe `url` with a `HEAD` request.
///
/// A non-success status aborts the download. A server announcing byte ranges
/// without a usable `Content-Length` is rejected with
/// [`Error::UnknownLength`], since segments cannot be planned without a size.
/// Without range support a missing size is accepted.
pub async fn probe<T: Transport>(
    transport: &T,
    url: &Url,
    headers: &HeaderMap,
) -> Result<ResourceMetadata> {
    let response = transport
        .head(url, headers.clone())
        .await
        .map_err(|source| Error::ProbeTransport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Probe {
            url: url.to_string(),
            status,
        });
    }

    let metadata = ResourceMetadata {
        total_size: content_length(response.headers()),
        range_supported: accepts_byte_ranges(response.headers()),
    };
    debug!(
        url = %url,
        total_size = ?metadata.total_size,
        range_supported = metadata.range_supported,
        "Probed resource"
    );

    if metadata.range_supported && metadata.total_size.is_none() {
        return Err(Error::UnknownLength {
            url: url.to_string(),
        });
    }

    Ok(metadata)
}
