//! The uniform response shape every endpoint returns.

use serde::{Deserialize, Serialize};

/// Uniform response envelope: `{code, status, message, data}`.
///
/// The interceptors only read `message`; `data` is opaque to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: T,
}

/// Body attached to an HTTP-level failure.
///
/// Error responses use the same envelope; their `data` is usually null.
pub type ErrorBody = ResponseEnvelope<serde_json::Value>;

impl<T> ResponseEnvelope<T> {
    pub fn new(code: u16, status: impl Into<String>, message: impl Into<String>, data: T) -> Self {
        Self {
            code,
            status: status.into(),
            message: message.into(),
            data,
        }
    }

    /// Replace the payload, keeping the envelope fields.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResponseEnvelope<U> {
        ResponseEnvelope {
            code: self.code,
            status: self.status,
            message: self.message,
            data: f(self.data),
        }
    }
}

impl ErrorBody {
    /// Build an error body with null data.
    pub fn error(code: u16, status: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, status, message, serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_envelope() {
        let value = json!({
            "code": 200,
            "status": "OK",
            "message": "Documents retrieved",
            "data": {"documents": {"content": [], "totalPages": 0}}
        });
        let env: ResponseEnvelope<serde_json::Value> = serde_json::from_value(value).unwrap();
        assert_eq!(env.code, 200);
        assert_eq!(env.status, "OK");
        assert_eq!(env.message, "Documents retrieved");
        assert_eq!(env.data["documents"]["totalPages"], 0);
    }

    #[test]
    fn test_missing_fields_default() {
        let env: ErrorBody = serde_json::from_value(json!({"message": "boom"})).unwrap();
        assert_eq!(env.code, 0);
        assert_eq!(env.status, "");
        assert_eq!(env.message, "boom");
        assert!(env.data.is_null());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_value::<ErrorBody>(json!("plain text")).is_err());
    }

    #[test]
    fn test_map_keeps_envelope_fields() {
        let env = ResponseEnvelope::new(201, "CREATED", "Uploaded", vec![1, 2, 3]);
        let mapped = env.map(|d| d.len());
        assert_eq!(mapped.code, 201);
        assert_eq!(mapped.message, "Uploaded");
        assert_eq!(mapped.data, 3);
    }
}
