//! Shared utility functions.
//!
//! - [`headers`] - `Content-Length` and `Accept-Ranges` extraction from HTTP responses

pub mod headers;

pub use headers::{accepts_byte_ranges, content_length};
