//! Success-path interceptor.

use std::sync::Arc;

use super::policy::RoutePolicy;
use crate::api::ResponseEnvelope;
use crate::notify::NotificationSink;
use crate::session::SessionStore;

/// Observes successful calls: clears the session on logout and announces the
/// envelope message unless the path is quiet.
pub struct ResponseInterceptor {
    session: Arc<dyn SessionStore>,
    notifier: Arc<dyn NotificationSink>,
    policy: RoutePolicy,
}

impl ResponseInterceptor {
    pub fn new(
        session: Arc<dyn SessionStore>,
        notifier: Arc<dyn NotificationSink>,
        policy: RoutePolicy,
    ) -> Self {
        Self {
            session,
            notifier,
            policy,
        }
    }

    /// Run the success side effects and hand the envelope back untouched.
    pub fn intercept<T>(
        &self,
        envelope: ResponseEnvelope<T>,
        request_path: &str,
    ) -> ResponseEnvelope<T> {
        log::debug!(
            "Response for '{}': code={} status={} message={}",
            request_path,
            envelope.code,
            envelope.status,
            envelope.message
        );

        if self.policy.is_logout(request_path) {
            if let Err(e) = self.session.clear() {
                log::warn!("Failed to clear session flag after logout: {}", e);
            }
        }

        if !self.policy.is_quiet(request_path) {
            self.notifier.notify_success(&envelope.message);
        }

        envelope
    }
}
