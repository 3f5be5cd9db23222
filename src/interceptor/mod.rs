//! Response and error interceptors
//!
//! Every call an executor performs passes through exactly one of the two
//! hooks in [`CallHooks`]. The hooks classify, update the session flag and
//! notify, in that order, then return the outcome unchanged.

mod error;
mod policy;
mod response;

use std::sync::Arc;

use crate::api::{RawFailure, ResponseEnvelope};
use crate::notify::NotificationSink;
use crate::session::SessionStore;

pub use error::{
    ErrorInterceptor, NOT_LOGGED_IN_MESSAGE, UNAUTHORIZED_STATUS, UNAUTHORIZED_STATUS_CODE,
    UNKNOWN_ERROR_MESSAGE, is_not_logged_in,
};
pub use policy::{DEFAULT_LOGOUT_MARKER, DEFAULT_QUIET_MARKER, RoutePolicy};
pub use response::ResponseInterceptor;

/// The two points an executor must call around each request.
pub trait CallHooks: Send + Sync {
    /// Called once per successful call, after the body is decoded.
    fn on_call_success<T>(
        &self,
        envelope: ResponseEnvelope<T>,
        request_path: &str,
    ) -> ResponseEnvelope<T>;

    /// Called once per failed call, after failure is determined.
    fn on_call_failure(&self, failure: RawFailure, request_path: &str) -> RawFailure;
}

/// Both interceptors sharing one session store and one notification sink.
pub struct Interceptors {
    response: ResponseInterceptor,
    error: ErrorInterceptor,
}

impl Interceptors {
    pub fn new(
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn NotificationSink>,
        policy: RoutePolicy,
    ) -> Self {
        Self {
            response: ResponseInterceptor::new(session.clone(), notifier.clone(), policy),
            error: ErrorInterceptor::new(session, notifier),
        }
    }

    pub fn response(&self) -> &ResponseInterceptor {
        &self.response
    }

    pub fn error(&self) -> &ErrorInterceptor {
        &self.error
    }
}

impl CallHooks for Interceptors {
    fn on_call_success<T>(
        &self,
        envelope: ResponseEnvelope<T>,
        request_path: &str,
    ) -> ResponseEnvelope<T> {
        self.response.intercept(envelope, request_path)
    }

    fn on_call_failure(&self, failure: RawFailure, request_path: &str) -> RawFailure {
        self.error.intercept(failure, request_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::session::{MemorySessionStore, SessionFlag};

    #[test]
    fn test_hooks_share_session_and_notifier() {
        let session = Arc::new(MemorySessionStore::with_flag(SessionFlag::LoggedIn));
        let notifier = Arc::new(RecordingNotifier::new());
        let hooks = Interceptors::new(session.clone(), notifier.clone(), RoutePolicy::default());

        hooks.on_call_failure(
            RawFailure::http(
                401,
                serde_json::json!({"status": "UNAUTHORIZED", "message": "You are not logged in"}),
            ),
            "documents",
        );
        assert_eq!(session.flag().unwrap(), SessionFlag::LoggedOut);

        hooks.on_call_success(ResponseEnvelope::new(200, "OK", "bye", ()), "logout");
        assert_eq!(session.flag().unwrap(), SessionFlag::Absent);
        assert_eq!(notifier.len(), 2);
    }
}
