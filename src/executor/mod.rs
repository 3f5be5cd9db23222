//! Query executor - sends a request, decodes it, and runs exactly one hook
//!
//! The executor owns no policy of its own: it never retries, never builds
//! request bodies, and never changes what the hooks return.

mod decode;
mod transport;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{CallOutcome, ResponseEnvelope, classify};
use crate::error::{DocdeskError, Result};
use crate::interceptor::CallHooks;

pub use decode::decode_response;
pub use transport::{ApiRequest, MockTransport, RawResponse, ReqwestTransport, Transport};

/// Runs calls through a transport and the interceptor hooks.
pub struct Executor<H, T> {
    hooks: H,
    transport: T,
}

impl<H: CallHooks, T: Transport> Executor<H, T> {
    pub fn new(hooks: H, transport: T) -> Self {
        Self { hooks, transport }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform one call and return its outcome after the matching hook ran.
    pub async fn run<D: DeserializeOwned>(&self, request: &ApiRequest) -> CallOutcome<D> {
        tracing::debug!(method = %request.method, path = %request.path, "sending request");

        let decoded = match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(
                    status = response.status,
                    content_type = ?response.content_type,
                    "response received"
                );
                decode_response::<D>(&response)
            }
            Err(failure) => Err(failure),
        };

        match decoded {
            Ok(envelope) => {
                let payload = self.hooks.on_call_success(envelope, &request.path);
                CallOutcome::success(payload, &request.path)
            }
            Err(failure) => {
                tracing::debug!(status = %failure.status, "call failed");
                let failure = self.hooks.on_call_failure(failure, &request.path);
                CallOutcome::failure(failure, &request.path)
            }
        }
    }

    /// Like [`Executor::run`], surfacing failures as [`DocdeskError::Call`].
    pub async fn execute<D: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<ResponseEnvelope<D>> {
        match self.run::<D>(request).await {
            CallOutcome::Success { payload, .. } => Ok(payload),
            CallOutcome::Failure { failure, request_path } => Err(DocdeskError::Call {
                path: request_path,
                kind: classify(&failure),
            }),
        }
    }

    /// Execute with untyped JSON data.
    pub async fn execute_json(&self, request: &ApiRequest) -> Result<ResponseEnvelope<Value>> {
        self.execute::<Value>(request).await
    }
}
