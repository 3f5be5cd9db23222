//! Failure-path interceptor.

use std::sync::Arc;

use crate::api::{FailureKind, RawFailure, classify};
use crate::notify::NotificationSink;
use crate::session::SessionStore;

/// HTTP status of the "not logged in" rejection.
pub const UNAUTHORIZED_STATUS_CODE: u16 = 401;

/// Envelope status of the "not logged in" rejection.
pub const UNAUTHORIZED_STATUS: &str = "UNAUTHORIZED";

/// Envelope message of the "not logged in" rejection.
pub const NOT_LOGGED_IN_MESSAGE: &str = "You are not logged in";

/// Shown when a failure cannot be classified.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Observes failed calls: invalidates the session on the exact "not logged
/// in" rejection and announces every failure once.
pub struct ErrorInterceptor {
    session: Arc<dyn SessionStore>,
    notifier: Arc<dyn NotificationSink>,
}

impl ErrorInterceptor {
    pub fn new(session: Arc<dyn SessionStore>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { session, notifier }
    }

    /// Run the failure side effects and hand the failure back untouched.
    pub fn intercept(&self, failure: RawFailure, request_path: &str) -> RawFailure {
        let kind = classify(&failure);
        log::debug!("Failure for '{}' ({}): {:?}", request_path, kind.label(), failure);
        self.apply(&kind);
        failure
    }

    /// Side effects for an already classified failure.
    pub fn apply(&self, kind: &FailureKind) {
        match kind {
            FailureKind::HttpError { status_code, body } => {
                if is_not_logged_in(*status_code, &body.status, &body.message) {
                    if let Err(e) = self.session.invalidate() {
                        log::warn!("Failed to invalidate session flag: {}", e);
                    }
                }
                self.notifier.notify_failure(&body.message);
            }
            FailureKind::TransportError { message } | FailureKind::ParsingError { message } => {
                self.notifier.notify_failure(message);
            }
            FailureKind::Unknown => {
                self.notifier.notify_failure(UNKNOWN_ERROR_MESSAGE);
            }
        }
    }
}

/// Exact match on all three fields of the "not logged in" rejection.
pub fn is_not_logged_in(status_code: u16, status: &str, message: &str) -> bool {
    status_code == UNAUTHORIZED_STATUS_CODE
        && status == UNAUTHORIZED_STATUS
        && message == NOT_LOGGED_IN_MESSAGE
}
