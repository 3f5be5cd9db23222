//! Terminal result of one API call.

use super::envelope::ResponseEnvelope;
use super::failure::{FailureKind, RawFailure, classify};

/// Outcome of one call. The request path is kept on both arms.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome<T> {
    Success {
        payload: ResponseEnvelope<T>,
        request_path: String,
    },
    Failure {
        failure: RawFailure,
        request_path: String,
    },
}

impl<T> CallOutcome<T> {
    pub fn success(payload: ResponseEnvelope<T>, request_path: impl Into<String>) -> Self {
        CallOutcome::Success {
            payload,
            request_path: request_path.into(),
        }
    }

    pub fn failure(failure: RawFailure, request_path: impl Into<String>) -> Self {
        CallOutcome::Failure {
            failure,
            request_path: request_path.into(),
        }
    }

    pub fn request_path(&self) -> &str {
        match self {
            CallOutcome::Success { request_path, .. }
            | CallOutcome::Failure { request_path, .. } => request_path,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Success { .. })
    }

    /// Classified failure kind, `None` for a success.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            CallOutcome::Success { .. } => None,
            CallOutcome::Failure { failure, .. } => Some(classify(failure)),
        }
    }
}
