//! Configuration structures and defaults for the downloader.
//!
//! [`DownloaderConfig`] gathers what stays the same across downloads: the
//! transport settings turned into an [`HttpClientConfig`], extra request
//! headers and the progress bar style. Per-download settings (destination,
//! segment count, user agent) live on [`crate::DownloadRequest`].

use crate::http::HttpClientConfig;
use crate::StyleOptions;

use reqwest::{header::HeaderMap, Proxy};
use std::time::Duration;

/// Configuration structure for the downloader
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    /// Downloader style options.
    pub style_options: StyleOptions,
    /// Custom HTTP headers sent with every request.
    pub headers: Option<HeaderMap>,
    /// Explicit proxy. When unset, environment proxies apply.
    pub proxy: Option<Proxy>,
    /// Total time allowed for a single request.
    pub timeout: Option<Duration>,
    /// Time allowed to establish a connection.
    pub connect_timeout: Option<Duration>,
    /// Maximum number of redirects to follow.
    pub redirects: usize,
}

impl DownloaderConfig {
    /// Transport settings for [`crate::create_http_client`].
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            proxy: self.proxy.clone(),
            headers: None,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            redirects: self.redirects,
        }
    }
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        let http = HttpClientConfig::default();
        Self {
            style_options: StyleOptions::default(),
            headers: None,
            proxy: http.proxy,
            timeout: http.timeout,
            connect_timeout: http.connect_timeout,
            redirects: http.redirects,
        }
    }
}
