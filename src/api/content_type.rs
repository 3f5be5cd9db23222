//! Content-type gating for response bodies.
//!
//! The executor only attempts to decode a body whose declared content type is
//! on a fixed allow-list. Anything else, including a missing header, is
//! treated as "do not parse".

use reqwest::header::{CONTENT_TYPE, HeaderMap};

/// Content types the client is willing to decode.
pub const ACCEPTED_CONTENT_TYPES: [&str; 5] = [
    "application/vnd.api+json",
    "application/json",
    "application/vnd.hal+json",
    "application/pdf",
    "multipart/form-data",
];

/// Check whether a declared content type is acceptable for decoding.
///
/// Trailing whitespace is ignored; the comparison is otherwise exact, so
/// parameters like `; charset=utf-8` make the value unacceptable.
pub fn is_acceptable(content_type: Option<&str>) -> bool {
    match content_type {
        Some(value) => ACCEPTED_CONTENT_TYPES.contains(&value.trim_end()),
        None => false,
    }
}

/// Read the `content-type` header from a header map.
///
/// Returns `None` when the header is missing or not valid visible ASCII.
pub fn content_type_of(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_every_allow_listed_type_is_acceptable() {
        for ct in ACCEPTED_CONTENT_TYPES {
            assert!(is_acceptable(Some(ct)), "{} should be acceptable", ct);
        }
    }

    #[test]
    fn test_absent_is_not_acceptable() {
        assert!(!is_acceptable(None));
    }

    #[test]
    fn test_other_types_are_not_acceptable() {
        assert!(!is_acceptable(Some("text/html")));
        assert!(!is_acceptable(Some("text/plain")));
        assert!(!is_acceptable(Some("")));
        assert!(!is_acceptable(Some("application/xml")));
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        assert!(is_acceptable(Some("application/json  ")));
        assert!(is_acceptable(Some("application/pdf\t")));
    }

    #[test]
    fn test_leading_whitespace_is_not_trimmed() {
        assert!(!is_acceptable(Some(" application/json")));
    }

    #[test]
    fn test_parameters_are_not_stripped() {
        assert!(!is_acceptable(Some("application/json; charset=utf-8")));
    }

    #[test]
    fn test_content_type_of_header_map() {
        let mut headers = HeaderMap::new();
        assert_eq!(content_type_of(&headers), None);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/hal+json"));
        assert_eq!(content_type_of(&headers), Some("application/hal+json"));
        assert!(!is_acceptable(content_type_of(&headers)));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/vnd.hal+json"));
        assert!(is_acceptable(content_type_of(&headers)));
    }
}
