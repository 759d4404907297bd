#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Url;
use splinter::{
    DownloadRequest, Downloader, DownloaderBuilder, HttpClientConfig, Segment, SegmentResult,
};
use splinter::progress::{ProgressBarOpts, StyleOptions};

use super::fake::FakeTransport;

// Common test constants
pub const TEST_URL: &str = "http://domain.com/go1.22.0.linux-amd64.tar.gz";
pub const TEST_FILENAME: &str = "go1.22.0.linux-amd64.tar.gz";
pub const TEST_USER_AGENT: &str = "splinter-test-agent";

/// Known digests.
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
pub const HELLO_WORLD_SHA256: &str =
    "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

/// Parses the common test URL
pub fn test_url() -> Url {
    Url::parse(TEST_URL).expect("Invalid test url")
}

/// Creates a request for the common test URL saved under `dir`
pub fn create_test_request(dir: &Path, parts: usize) -> DownloadRequest {
    DownloadRequest::try_from(TEST_URL)
        .expect("Failed to create request")
        .with_directory(dir)
        .with_parts(parts)
        .with_user_agent(TEST_USER_AGENT)
}

/// Creates a downloader without progress bars on top of `transport`
pub fn create_test_downloader(transport: FakeTransport) -> Downloader<FakeTransport> {
    DownloaderBuilder::hidden().build_with_transport(transport)
}

/// Builds the segment results a fetch of `content` along `segments` would produce
pub fn slice_results(content: &[u8], segments: &[Segment]) -> Vec<SegmentResult> {
    segments
        .iter()
        .map(|s| SegmentResult::new(*s, content[s.start as usize..=s.end as usize].to_vec()))
        .collect()
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that nothing exists at the given path
pub fn assert_file_missing(path: &Path) {
    assert!(!path.exists(), "File should not exist at path: {:?}", path);
}

/// Asserts that a file holds exactly `expected`
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = fs::read(path).expect("Failed to read file");
    assert_eq!(content.len(), expected.len(), "File size mismatch at path: {:?}", path);
    assert!(content == expected, "File content mismatch at path: {:?}", path);
}

// === HTTP Configuration Helpers ===

/// Creates test headers with common user agent
pub fn create_test_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    headers
}

/// Creates a test HTTP client configuration
pub fn create_test_http_config() -> HttpClientConfig {
    HttpClientConfig {
        headers: Some(create_test_headers()),
        ..HttpClientConfig::default()
    }
}

// === Progress Bar Helpers ===

/// Creates hidden style options for testing
pub fn create_disabled_style_options() -> StyleOptions {
    StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
}
