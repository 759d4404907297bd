//! The seam between the download pipeline and the network.
//!
//! The prober and the fetcher never talk to reqwest directly; they go through
//! [`Transport`], which is implemented for [`ClientWithMiddleware`]. Tests
//! substitute an in-memory implementation that answers with canned
//! [`Response`]s.

use reqwest::{header::HeaderMap, Response, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::future::Future;

/// Issues the two kinds of requests a download needs.
pub trait Transport: Send + Sync {
    /// Sends a `HEAD` request with the given headers.
    fn head(
        &self,
        url: &Url,
        headers: HeaderMap,
    ) -> impl Future<Output = reqwest_middleware::Result<Response>> + Send;

    /// Sends a `GET` request with the given headers.
    fn get(
        &self,
        url: &Url,
        headers: HeaderMap,
    ) -> impl Future<Output = reqwest_middleware::Result<Response>> + Send;
}

impl Transport for ClientWithMiddleware {
    async fn head(&self, url: &Url, headers: HeaderMap) -> reqwest_middleware::Result<Response> {
        ClientWithMiddleware::head(self, url.clone())
            .headers(headers)
            .send()
            .await
    }

    async fn get(&self, url: &Url, headers: HeaderMap) -> reqwest_middleware::Result<Response> {
        ClientWithMiddleware::get(self, url.clone())
            .headers(headers)
            .send()
            .await
    }
}
