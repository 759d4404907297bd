//! HTTP client setup and middleware configuration.
//!
//! Every request issued by the downloader goes through a
//! [`ClientWithMiddleware`] built here. The tracing middleware records each
//! request and response; the inner reqwest client carries the transport
//! settings (proxy, timeouts, redirect policy, default headers).
//!
//! Ambient proxy variables (`HTTP_PROXY`, `HTTPS_PROXY`, `ALL_PROXY`,
//! `NO_PROXY`) and the system proxy configuration are honoured unless an
//! explicit proxy is set.
//!
//! # Examples
//!
//! ```rust
//! use splinter::http::{create_http_client, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     timeout: Some(Duration::from_secs(600)),
//!     ..HttpClientConfig::default()
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use reqwest::{header::HeaderMap, redirect, Proxy};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::time::Duration;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Optional explicit proxy. When unset, environment proxies apply.
    pub proxy: Option<Proxy>,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
    /// Total time allowed for a single request, body included.
    pub timeout: Option<Duration>,
    /// Time allowed to establish a connection.
    pub connect_timeout: Option<Duration>,
    /// Maximum number of redirects to follow.
    pub redirects: usize,
}

impl HttpClientConfig {
    /// Number of redirects followed by default.
    pub const DEFAULT_REDIRECTS: usize = 10;
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            headers: None,
            timeout: None,
            connect_timeout: Some(Duration::from_secs(30)),
            redirects: Self::DEFAULT_REDIRECTS,
        }
    }
}

/// Creates an HTTP client with middleware configuration.
///
/// Requests are not retried: a failed transfer is reported to the caller,
/// which decides whether the whole download is attempted again.
pub fn create_http_client(
    config: HttpClientConfig,
) -> Result<ClientWithMiddleware, reqwest::Error> {
    let redirect_policy = match config.redirects {
        0 => redirect::Policy::none(),
        n => redirect::Policy::limited(n),
    };
    let mut inner_client_builder = reqwest::Client::builder().redirect(redirect_policy);

    if let Some(proxy) = config.proxy {
        inner_client_builder = inner_client_builder.proxy(proxy);
    }

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    if let Some(timeout) = config.timeout {
        inner_client_builder = inner_client_builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        inner_client_builder = inner_client_builder.connect_timeout(connect_timeout);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
