//! docdesk - client side of a document-management API
//!
//! Every call goes through a pair of interceptors that classify the outcome,
//! keep the session flag in step with the server, and notify the user exactly
//! once, without ever changing what the caller receives.

pub mod api;
pub mod error;
pub mod executor;
pub mod interceptor;
pub mod notify;
pub mod session;

pub use error::{DocdeskError, Result};
