//! Request-path rules that drive interceptor side effects.

/// Path substring identifying a logout call.
pub const DEFAULT_LOGOUT_MARKER: &str = "logout";

/// Path substring identifying the quiet profile fetch.
pub const DEFAULT_QUIET_MARKER: &str = "profile";

/// Which request paths clear the session and which stay silent on success.
///
/// Matching is by substring, so `"user/profile"` and `"profile/photo"` both
/// count as profile calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePolicy {
    pub logout_marker: String,
    pub quiet_markers: Vec<String>,
}

impl Default for RoutePolicy {
    fn default() -> Self {
        Self {
            logout_marker: DEFAULT_LOGOUT_MARKER.to_string(),
            quiet_markers: vec![DEFAULT_QUIET_MARKER.to_string()],
        }
    }
}

impl RoutePolicy {
    pub fn new(logout_marker: impl Into<String>, quiet_markers: Vec<String>) -> Self {
        Self {
            logout_marker: logout_marker.into(),
            quiet_markers,
        }
    }

    pub fn is_logout(&self, request_path: &str) -> bool {
        !self.logout_marker.is_empty() && request_path.contains(&self.logout_marker)
    }

    /// True if a successful call to this path must not notify.
    ///
    /// An empty path is quiet: there is nothing to attribute the message to.
    pub fn is_quiet(&self, request_path: &str) -> bool {
        request_path.is_empty()
            || self
                .quiet_markers
                .iter()
                .any(|m| !m.is_empty() && request_path.contains(m.as_str()))
    }
}
