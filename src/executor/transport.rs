//! Transport abstraction - one request in, one raw response or failure out.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};

use crate::api::{RawFailure, content_type_of};
use crate::error::{DocdeskError, Result};

/// A request built by the caller. The executor never alters it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Logical endpoint, relative to the base URL
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }
}

/// What came back over the wire, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// A response with a JSON body.
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string().into_bytes(),
        }
    }

    pub fn text(status: u16, content_type: Option<&str>, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into().into_bytes(),
        }
    }
}

/// Sends a request once. No retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Returns the raw response, or a `FETCH_ERROR`/`TIMEOUT_ERROR` failure
    /// when nothing usable came back.
    async fn send(&self, request: &ApiRequest) -> std::result::Result<RawResponse, RawFailure>;
}

/// HTTP transport backed by reqwest.
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DocdeskError::Client(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

fn join_url(base_url: &str, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base_url.trim_end_matches('/').to_string();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

fn failure_from_reqwest(e: &reqwest::Error) -> RawFailure {
    if e.is_timeout() {
        RawFailure::timeout(e.to_string())
    } else {
        RawFailure::fetch(e.to_string())
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> std::result::Result<RawResponse, RawFailure> {
        let url = self.url_for(&request.path);

        let response = self
            .client
            .request(request.method.clone(), &url)
            .query(&request.query)
            .send()
            .await
            .map_err(|e| failure_from_reqwest(&e))?;

        let status = response.status().as_u16();
        let content_type = content_type_of(response.headers()).map(str::to_string);
        let body = response.bytes().await.map_err(|e| failure_from_reqwest(&e))?;

        Ok(RawResponse {
            status,
            content_type,
            body: body.to_vec(),
        })
    }
}

/// Transport that replays queued results and records what it was asked.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<std::result::Result<RawResponse, RawFailure>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, response: RawResponse) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(Ok(response));
        }
    }

    pub fn push_failure(&self, failure: RawFailure) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(Err(failure));
        }
    }

    /// Requests sent so far.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> std::result::Result<RawResponse, RawFailure> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        let next = self.responses.lock().ok().and_then(|mut queue| queue.pop_front());
        next.unwrap_or_else(|| Err(RawFailure::fetch("no mock response queued")))
    }
}
