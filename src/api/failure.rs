//! Failure values and their classification.
//!
//! The executor reports a failed call as a [`RawFailure`], a loosely shaped
//! value mirroring what the transport layer knows. [`classify`] turns it into
//! exactly one [`FailureKind`] so the rest of the code can match on a closed
//! set instead of probing fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::ErrorBody;

/// Marker for a request that never reached, or never came back from, the server.
pub const FETCH_ERROR: &str = "FETCH_ERROR";

/// Marker for a response body that could not be decoded.
pub const PARSING_ERROR: &str = "PARSING_ERROR";

/// Marker for a request that exceeded the client timeout.
pub const TIMEOUT_ERROR: &str = "TIMEOUT_ERROR";

/// Marker for failures raised by application code rather than the transport.
pub const CUSTOM_ERROR: &str = "CUSTOM_ERROR";

/// Status of a failed call: a numeric HTTP code or a transport marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FailureStatus {
    Code(u16),
    Marker(String),
}

impl FailureStatus {
    pub fn marker(marker: impl Into<String>) -> Self {
        FailureStatus::Marker(marker.into())
    }

    /// True if this is the given marker.
    pub fn is_marker(&self, marker: &str) -> bool {
        matches!(self, FailureStatus::Marker(m) if m == marker)
    }
}

impl fmt::Display for FailureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureStatus::Code(code) => write!(f, "{}", code),
            FailureStatus::Marker(marker) => f.write_str(marker),
        }
    }
}

/// A failed call as reported by the executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFailure {
    pub status: FailureStatus,

    /// Decoded error body, when the server sent one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Transport or parsing message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// HTTP status the parsing failure was attached to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_status: Option<u16>,
}

impl RawFailure {
    /// An HTTP-level failure with a decoded body.
    pub fn http(status: u16, data: serde_json::Value) -> Self {
        Self {
            status: FailureStatus::Code(status),
            data: Some(data),
            error: None,
            original_status: None,
        }
    }

    /// An HTTP-level failure whose body was not decoded.
    pub fn http_without_body(status: u16) -> Self {
        Self {
            status: FailureStatus::Code(status),
            data: None,
            error: None,
            original_status: None,
        }
    }

    /// A connectivity failure.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::with_marker(FETCH_ERROR, message)
    }

    /// A body that could not be decoded.
    pub fn parsing(original_status: u16, message: impl Into<String>) -> Self {
        Self {
            original_status: Some(original_status),
            ..Self::with_marker(PARSING_ERROR, message)
        }
    }

    /// A client-side timeout.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::with_marker(TIMEOUT_ERROR, message)
    }

    pub fn with_marker(marker: &str, message: impl Into<String>) -> Self {
        Self {
            status: FailureStatus::marker(marker),
            data: None,
            error: Some(message.into()),
            original_status: None,
        }
    }
}

/// The single category a failure belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureKind {
    /// The server rejected the request with a structured body
    HttpError { status_code: u16, body: ErrorBody },
    /// The request never reached, or never returned from, the network
    TransportError { message: String },
    /// The response body could not be decoded
    ParsingError { message: String },
    /// Anything else
    Unknown,
}

impl FailureKind {
    /// Short label for logs and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::HttpError { .. } => "http",
            FailureKind::TransportError { .. } => "transport",
            FailureKind::ParsingError { .. } => "parsing",
            FailureKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpError { status_code, body } => {
                write!(f, "HTTP {}: {}", status_code, body.message)
            }
            FailureKind::TransportError { message } => write!(f, "transport error: {}", message),
            FailureKind::ParsingError { message } => write!(f, "parsing error: {}", message),
            FailureKind::Unknown => f.write_str("unknown error"),
        }
    }
}

/// Assign a failure to exactly one category.
///
/// Rules are tried in order and the first match wins:
/// 1. numeric status with a JSON object body
/// 2. `FETCH_ERROR` marker
/// 3. `PARSING_ERROR` marker
/// 4. anything else
pub fn classify(failure: &RawFailure) -> FailureKind {
    if let (FailureStatus::Code(status_code), Some(data)) = (&failure.status, &failure.data) {
        if let Some(body) = error_body(*status_code, data) {
            return FailureKind::HttpError {
                status_code: *status_code,
                body,
            };
        }
    }

    if failure.status.is_marker(FETCH_ERROR) {
        return FailureKind::TransportError {
            message: message_or_marker(failure, FETCH_ERROR),
        };
    }

    if failure.status.is_marker(PARSING_ERROR) {
        return FailureKind::ParsingError {
            message: message_or_marker(failure, PARSING_ERROR),
        };
    }

    FailureKind::Unknown
}

/// Read an error body field by field, tolerating odd field types.
///
/// Servers do not all follow the envelope: `code` may be a string like
/// `"E404"` and `status` may be numeric. A non-numeric `code` falls back to
/// the HTTP status; a numeric `status` is kept as its decimal text.
fn error_body(status_code: u16, data: &Value) -> Option<ErrorBody> {
    let object = data.as_object()?;

    let code = object
        .get("code")
        .and_then(Value::as_u64)
        .and_then(|c| u16::try_from(c).ok())
        .unwrap_or(status_code);

    Some(ErrorBody {
        code,
        status: object.get("status").map(text_of).unwrap_or_default(),
        message: object.get("message").map(text_of).unwrap_or_default(),
        data: object.get("data").cloned().unwrap_or(Value::Null),
    })
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn message_or_marker(failure: &RawFailure, marker: &str) -> String {
    failure.error.clone().unwrap_or_else(|| marker.to_string())
}
