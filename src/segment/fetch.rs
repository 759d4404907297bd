//! Segment fetching.
//!
//! A fetch performs one `GET`, reads the whole body into memory and checks
//! that the server delivered exactly what was asked for. It never touches the
//! disk; the payload goes back to the coordinator.

use super::plan::Segment;
use crate::error::{Error, Result};
use crate::http::Transport;
use crate::utils::content_length;

use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::{
    header::{HeaderMap, HeaderValue, RANGE},
    StatusCode, Url,
};
use tracing::debug;

/// Largest buffer reserved up front from an announced length. Bodies larger
/// than this grow the buffer as they arrive.
const PREALLOCATE_LIMIT: usize = 8 * 1024 * 1024;

/// How a segment is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    /// Send a `Range` header for the segment's bytes.
    Ranged,
    /// Request the whole resource without a `Range` header.
    Whole,
}

/// A segment together with its fetched payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentResult {
    /// The segment that was requested.
    pub segment: Segment,
    /// The bytes received for it.
    pub data: Vec<u8>,
}

impl SegmentResult {
    /// Create a new [`SegmentResult`].
    pub fn new(segment: Segment, data: Vec<u8>) -> Self {
        Self { segment, data }
    }

    /// Number of bytes received.
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Fetch one segment of `url`.
///
/// A `404 Not Found` or `410 Gone` answer is reported as
/// [`Error::InvalidSource`]; any other non-success status as
/// [`Error::SegmentStatus`]. The body length must match the requested range
/// for [`Transfer::Ranged`], or the response's `Content-Length` (when
/// present) for [`Transfer::Whole`].
pub async fn fetch_segment<T: Transport>(
    transport: &T,
    url: &Url,
    headers: &HeaderMap,
    segment: Segment,
    transfer: Transfer,
    progress: &ProgressBar,
) -> Result<SegmentResult> {
    let mut headers = headers.clone();
    if transfer == Transfer::Ranged {
        let range = HeaderValue::from_str(&segment.range_header())
            .map_err(|e| Error::Internal(format!("invalid range header: {}", e)))?;
        headers.insert(RANGE, range);
    }

    debug!(index = segment.index, start = segment.start, end = segment.end, "Fetching segment");
    let response = transport
        .get(url, headers)
        .await
        .map_err(|source| transport_error(segment, source))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
        return Err(Error::InvalidSource {
            url: url.to_string(),
            status,
        });
    }
    if !status.is_success() {
        return Err(Error::SegmentStatus {
            index: segment.index,
            start: segment.start,
            end: segment.end,
            status,
        });
    }

    let expected = match transfer {
        Transfer::Ranged => Some(segment.len()),
        Transfer::Whole => content_length(response.headers()),
    };

    let capacity = expected
        .and_then(|len| usize::try_from(len).ok())
        .map_or(0, |len| len.min(PREALLOCATE_LIMIT));
    let mut data = Vec::with_capacity(capacity);
    let mut stream = response.bytes_stream();
    while let Some(item) = stream.next().await {
        let chunk = item.map_err(|e| transport_error(segment, e.into()))?;
        progress.inc(chunk.len() as u64);
        data.extend_from_slice(&chunk);

        // Stop reading as soon as the body runs past what was asked for.
        if let Some(expected) = expected.filter(|&expected| data.len() as u64 > expected) {
            return Err(length_error(segment, expected, data.len() as u64));
        }
    }

    let received = data.len() as u64;
    if let Some(expected) = expected.filter(|&expected| received != expected) {
        return Err(length_error(segment, expected, received));
    }

    debug!(index = segment.index, received, "Segment complete");
    Ok(SegmentResult::new(segment, data))
}

fn length_error(segment: Segment, expected: u64, received: u64) -> Error {
    Error::SegmentLength {
        index: segment.index,
        start: segment.start,
        end: segment.end,
        expected,
        received,
    }
}

fn transport_error(segment: Segment, source: reqwest_middleware::Error) -> Error {
    Error::SegmentTransport {
        index: segment.index,
        start: segment.start,
        end: segment.end,
        source,
    }
}
