//! Builder pattern implementation for creating Downloader instances.
//!
//! # Examples
//!
//! ```rust
//! use splinter::downloader::DownloaderBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = DownloaderBuilder::new()
//!     .timeout(Duration::from_secs(600))
//!     .redirects(5)
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom Transport
//!
//! Anything implementing [`Transport`] can replace the HTTP client, which is
//! how the test-suite runs downloads without a network:
//!
//! ```rust,ignore
//! let downloader = DownloaderBuilder::hidden().build_with_transport(fake);
//! ```

use super::{config::DownloaderConfig, downloader::Downloader};
use crate::error::Result;
use crate::http::{create_http_client, Transport};
use crate::StyleOptions;

use reqwest::{
    header::{HeaderMap, HeaderValue, IntoHeaderName},
    Proxy,
};
use reqwest_middleware::ClientWithMiddleware;
use std::time::Duration;

/// A builder used to create a [`Downloader`].
///
/// ```rust
/// # fn main() -> Result<(), splinter::Error> {
/// use splinter::downloader::DownloaderBuilder;
///
/// let d = DownloaderBuilder::new().redirects(3).build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct DownloaderBuilder {
    config: DownloaderConfig,
}

impl DownloaderBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        DownloaderBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = DownloaderBuilder::default();
        builder.config.style_options = StyleOptions::hidden();
        builder
    }

    /// Set the downloader style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Route every request through `proxy` instead of the environment's proxy.
    pub fn proxy(mut self, proxy: Proxy) -> Self {
        self.config.proxy = Some(proxy);
        self
    }

    /// Set the time allowed for a single request, body included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the time allowed to establish a connection.
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.config.connect_timeout = Some(connect_timeout);
        self
    }

    /// Set the maximum number of redirects to follow. `0` disables redirects.
    pub fn redirects(mut self, redirects: usize) -> Self {
        self.config.redirects = redirects;
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one. A `User-Agent` set here is replaced by the
    /// one of each [`crate::DownloadRequest`].
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Downloader`] with the specified options and an HTTP client.
    pub fn build(self) -> Result<Downloader<ClientWithMiddleware>> {
        let client = create_http_client(self.config.http_client_config())?;
        Ok(Downloader::new(self.config, client))
    }

    /// Create the [`Downloader`] issuing its requests through `transport`.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Downloader<T> {
        Downloader::new(self.config, transport)
    }
}
