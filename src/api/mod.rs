//! API data model - envelopes, failures, outcomes and content-type gating
//!
//! This module provides:
//! - ResponseEnvelope, the uniform success shape
//! - RawFailure and its classification into FailureKind
//! - CallOutcome tying a result to its request path
//! - The content-type allow-list consulted before decoding

pub mod content_type;
pub mod envelope;
pub mod failure;
pub mod outcome;

pub use content_type::{ACCEPTED_CONTENT_TYPES, content_type_of, is_acceptable};
pub use envelope::{ErrorBody, ResponseEnvelope};
pub use failure::{
    CUSTOM_ERROR, FETCH_ERROR, FailureKind, FailureStatus, PARSING_ERROR, RawFailure,
    TIMEOUT_ERROR, classify,
};
pub use outcome::CallOutcome;
