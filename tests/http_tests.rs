//! Tests for the http module functionality.
//!
//! This file contains tests for:
//! - HTTP client creation from an HttpClientConfig
//! - The HEAD probe against a fake server

use splinter::http::{create_http_client, probe, HttpClientConfig, ResourceMetadata};
use splinter::Error;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Proxy, StatusCode};
use std::time::Duration;

mod common;
use common::fake::FakeTransport;
use common::helpers::*;

// === Client ===

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert!(config.proxy.is_none());
    assert!(config.headers.is_none());
    assert!(config.timeout.is_none());
    assert_eq!(config.connect_timeout, Some(Duration::from_secs(30)));
    assert_eq!(config.redirects, 10);
}

#[test]
fn test_create_http_client() {
    assert!(create_http_client(HttpClientConfig::default()).is_ok());
    assert!(create_http_client(create_test_http_config()).is_ok());
}

#[test]
fn test_create_http_client_with_options() {
    let config = HttpClientConfig {
        proxy: Some(Proxy::all("http://127.0.0.1:3128").unwrap()),
        timeout: Some(Duration::from_secs(60)),
        connect_timeout: None,
        redirects: 0,
        ..create_test_http_config()
    };
    assert!(create_http_client(config).is_ok());
}

// === Probe ===

#[tokio::test]
async fn test_probe_reports_size_and_ranges() {
    let transport = FakeTransport::new(create_test_content(1000));

    let metadata = probe(&transport, &test_url(), &create_test_headers())
        .await
        .unwrap();

    assert_eq!(
        metadata,
        ResourceMetadata {
            total_size: Some(1000),
            range_supported: true,
        }
    );
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "HEAD");
    assert_eq!(requests[0].user_agent.as_deref(), Some(TEST_USER_AGENT));
}

#[tokio::test]
async fn test_probe_without_range_support() {
    let transport = FakeTransport::new(create_test_content(1000)).accept_ranges(false);

    let metadata = probe(&transport, &test_url(), &HeaderMap::new())
        .await
        .unwrap();

    assert_eq!(metadata.total_size, Some(1000));
    assert!(!metadata.range_supported);
}

#[tokio::test]
async fn test_probe_missing_length_without_ranges_is_accepted() {
    let transport = FakeTransport::new(create_test_content(1000))
        .accept_ranges(false)
        .head_length(None);

    let metadata = probe(&transport, &test_url(), &HeaderMap::new())
        .await
        .unwrap();

    assert_eq!(metadata.total_size, None);
}

#[tokio::test]
async fn test_probe_missing_length_with_ranges_is_rejected() {
    for length in [None, Some("abc"), Some("-1")] {
        let transport = FakeTransport::new(create_test_content(1000)).head_length(length);

        let err = probe(&transport, &test_url(), &HeaderMap::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UnknownLength { .. }), "length {:?}", length);
    }
}

#[tokio::test]
async fn test_probe_rejects_error_status() {
    for code in [301, 404, 500] {
        let transport = FakeTransport::new(create_test_content(10)).head_status(code);

        let err = probe(&transport, &test_url(), &HeaderMap::new())
            .await
            .unwrap_err();

        match err {
            Error::Probe { url, status } => {
                assert_eq!(url, TEST_URL);
                assert_eq!(status, StatusCode::from_u16(code).unwrap());
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}

#[tokio::test]
async fn test_probe_forwards_headers() {
    let transport = FakeTransport::new(create_test_content(10));
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("go-version-manager"));

    probe(&transport, &test_url(), &headers).await.unwrap();

    assert_eq!(
        transport.requests()[0].user_agent.as_deref(),
        Some("go-version-manager")
    );
}
