//! Turning a raw response into an envelope or a failure value.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::RawResponse;
use crate::api::{RawFailure, ResponseEnvelope, is_acceptable};

/// Decode a raw response.
///
/// - 2xx with an acceptable content type decodes as an envelope whose `data`
///   decodes as `D`; anything that does not decode is a parsing failure.
/// - 2xx with any other content type is a parsing failure.
/// - non-2xx with an acceptable content type keeps the decoded JSON body
///   as the failure's data; an undecodable body is a parsing failure.
/// - non-2xx with any other content type is a bare status failure.
pub fn decode_response<D: DeserializeOwned>(
    response: &RawResponse,
) -> Result<ResponseEnvelope<D>, RawFailure> {
    let status = response.status;
    let content_type = response.content_type.as_deref();
    let acceptable = is_acceptable(content_type);

    if !(200..300).contains(&status) {
        if !acceptable {
            return Err(RawFailure::http_without_body(status));
        }
        return match serde_json::from_slice::<Value>(&response.body) {
            Ok(body) => Err(RawFailure::http(status, body)),
            Err(e) => Err(RawFailure::parsing(status, e.to_string())),
        };
    }

    if !acceptable {
        return Err(RawFailure::parsing(
            status,
            format!("Unsupported content type: {}", content_type.unwrap_or("none")),
        ));
    }

    let envelope: ResponseEnvelope<Value> = serde_json::from_slice(&response.body)
        .map_err(|e| RawFailure::parsing(status, e.to_string()))?;
    let data: D = serde_json::from_value(envelope.data)
        .map_err(|e| RawFailure::parsing(status, e.to_string()))?;

    Ok(ResponseEnvelope {
        code: envelope.code,
        status: envelope.status,
        message: envelope.message,
        data,
    })
}
