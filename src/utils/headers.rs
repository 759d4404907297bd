//! Response header parsing.
//!
//! The probe and the fetcher only ever need two facts from a response's
//! headers: how long the body is and whether byte ranges are accepted.

use reqwest::header::{HeaderMap, ACCEPT_RANGES, CONTENT_LENGTH};

/// Read the `Content-Length` header.
///
/// Returns `None` if the header is missing or if its value is not an u64.
///
/// # Example
///
/// ```rust
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH};
/// use splinter::utils::content_length;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_LENGTH, HeaderValue::from_static("1000"));
/// assert_eq!(content_length(&headers), Some(1000));
/// ```
pub fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
}

/// Whether the `Accept-Ranges` header announces byte ranges.
///
/// Only the `bytes` unit counts. A missing header, `none`, or any other unit
/// means the server must be treated as not supporting range requests.
pub fn accepts_byte_ranges(headers: &HeaderMap) -> bool {
    headers
        .get_all(ACCEPT_RANGES)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|unit| unit.trim().eq_ignore_ascii_case("bytes"))
}
