//! Session flag trait and value type.

use crate::error::Result;

/// Key the flag is stored under.
pub const LOGGED_IN_KEY: &str = "LOGGEDIN";

/// Belief about whether the caller is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlag {
    /// Stored as `"true"`
    LoggedIn,
    /// Stored as `"false"`
    LoggedOut,
    /// No value stored
    Absent,
}

impl SessionFlag {
    /// Parse a stored value. Anything other than `"true"`/`"false"` counts as absent.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => SessionFlag::LoggedIn,
            Some("false") => SessionFlag::LoggedOut,
            _ => SessionFlag::Absent,
        }
    }

    /// Value to store, `None` meaning "remove the key".
    pub fn as_stored(&self) -> Option<&'static str> {
        match self {
            SessionFlag::LoggedIn => Some("true"),
            SessionFlag::LoggedOut => Some("false"),
            SessionFlag::Absent => None,
        }
    }

    /// Only an explicit `"false"` forces a logout; absent and `"true"` do not.
    pub fn forces_logout(&self) -> bool {
        matches!(self, SessionFlag::LoggedOut)
    }
}

/// Process-wide session flag.
///
/// Every mutation is idempotent: setting the flag to the state it already
/// holds is a no-op.
pub trait SessionStore: Send + Sync {
    /// Current flag value.
    fn flag(&self) -> Result<SessionFlag>;

    /// Set the flag to `"false"`.
    fn invalidate(&self) -> Result<()>;

    /// Remove the flag entirely.
    fn clear(&self) -> Result<()>;

    /// Set the flag to `"true"`.
    fn mark_logged_in(&self) -> Result<()>;
}
