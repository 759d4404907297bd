#![allow(dead_code)]

//! An in-memory server answering the requests of a download.

use reqwest::header::{
    HeaderMap, HeaderName, ACCEPT_RANGES, CONTENT_LENGTH, CONTENT_RANGE, RANGE, USER_AGENT,
};
use reqwest::{Response, Url};
use splinter::Transport;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Misbehavior of the fake server for one range request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Answer with this status and an empty body.
    Status(u16),
    /// Drop this many bytes from the end of the body.
    Truncate(usize),
}

/// A request the fake server received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: &'static str,
    pub range: Option<String>,
    pub user_agent: Option<String>,
}

/// Serves a single resource. Clones share the request log.
#[derive(Debug, Clone)]
pub struct FakeTransport {
    body: Vec<u8>,
    accept_ranges: bool,
    head_status: u16,
    head_length: Option<Option<String>>,
    whole_length: Option<String>,
    faults: HashMap<u64, Fault>,
    yields: HashMap<u64, usize>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakeTransport {
    /// Serve `body` with range support.
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            accept_ranges: true,
            head_status: 200,
            head_length: None,
            whole_length: None,
            faults: HashMap::new(),
            yields: HashMap::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Whether `Accept-Ranges: bytes` is announced and honored.
    pub fn accept_ranges(mut self, accept: bool) -> Self {
        self.accept_ranges = accept;
        self
    }

    /// Status of the `HEAD` answer.
    pub fn head_status(mut self, status: u16) -> Self {
        self.head_status = status;
        self
    }

    /// Raw `Content-Length` of the `HEAD` answer; `None` omits the header.
    pub fn head_length(mut self, length: Option<&str>) -> Self {
        self.head_length = Some(length.map(String::from));
        self
    }

    /// Raw `Content-Length` of a `GET` answer without `Range`.
    pub fn whole_length(mut self, length: &str) -> Self {
        self.whole_length = Some(length.to_string());
        self
    }

    /// Misbehave for the request starting at byte `start`.
    pub fn fault(mut self, start: u64, fault: Fault) -> Self {
        self.faults.insert(start, fault);
        self
    }

    /// Yield to the runtime `count` times before answering the request
    /// starting at byte `start`.
    pub fn delay(mut self, start: u64, count: usize) -> Self {
        self.yields.insert(start, count);
        self
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// `GET` requests received so far.
    pub fn gets(&self) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "GET")
            .collect()
    }

    fn record(&self, method: &'static str, headers: &HeaderMap) -> Option<String> {
        let header = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        };
        let range = header(RANGE);
        self.requests.lock().unwrap().push(Recorded {
            method,
            range: range.clone(),
            user_agent: header(USER_AGENT),
        });
        range
    }

    fn respond(&self, status: u16, headers: Vec<(HeaderName, String)>, body: Vec<u8>) -> Response {
        let mut builder = http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(name, value);
        }
        Response::from(builder.body(body).unwrap())
    }

    fn parse_range(range: &str) -> (u64, u64) {
        let (start, end) = range
            .strip_prefix("bytes=")
            .and_then(|r| r.split_once('-'))
            .expect("malformed range header");
        (start.parse().unwrap(), end.parse().unwrap())
    }
}

impl Transport for FakeTransport {
    async fn head(&self, _url: &Url, headers: HeaderMap) -> reqwest_middleware::Result<Response> {
        self.record("HEAD", &headers);

        let mut answer = Vec::new();
        match &self.head_length {
            None => answer.push((CONTENT_LENGTH, self.body.len().to_string())),
            Some(Some(raw)) => answer.push((CONTENT_LENGTH, raw.clone())),
            Some(None) => {}
        }
        if self.accept_ranges {
            answer.push((ACCEPT_RANGES, String::from("bytes")));
        }
        Ok(self.respond(self.head_status, answer, Vec::new()))
    }

    async fn get(&self, _url: &Url, headers: HeaderMap) -> reqwest_middleware::Result<Response> {
        let range = self.record("GET", &headers);

        let ranged = range
            .as_deref()
            .filter(|_| self.accept_ranges)
            .map(Self::parse_range);
        let start = ranged.map(|(start, _)| start).unwrap_or_default();

        for _ in 0..self.yields.get(&start).copied().unwrap_or_default() {
            tokio::task::yield_now().await;
        }

        let (status, mut body, mut answer) = match ranged {
            Some((start, end)) => {
                let end = end.min(self.body.len() as u64 - 1);
                (
                    206,
                    self.body[start as usize..=end as usize].to_vec(),
                    vec![(
                        CONTENT_RANGE,
                        format!("bytes {}-{}/{}", start, end, self.body.len()),
                    )],
                )
            }
            None => (200, self.body.clone(), Vec::new()),
        };

        match self.faults.get(&start) {
            Some(Fault::Status(code)) => return Ok(self.respond(*code, Vec::new(), Vec::new())),
            Some(Fault::Truncate(n)) => body.truncate(body.len().saturating_sub(*n)),
            None => {}
        }

        let length = match (&self.whole_length, ranged) {
            (Some(raw), None) => raw.clone(),
            _ => body.len().to_string(),
        };
        answer.push((CONTENT_LENGTH, length));
        Ok(self.respond(status, answer, body))
    }
}
