//! Port trait for the generic remote-procedure-call primitive.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::RawResponse;

/// Sends one `{method, args}` call to the remote plugin API.
///
/// ## Contract
///
/// - Exactly one round trip per call; no retry, batching or caching.
/// - Never fails. Transport and authentication failures are returned as a
///   [`FailureSentinel`](crate::FailureSentinel) value.
/// - The response body is returned verbatim. Unwrapping is the caller's job.
#[async_trait]
pub trait RpcInvoker: Send + Sync {
    /// Invokes `method` with positional `args`.
    async fn invoke(&self, method: &str, args: Vec<Value>) -> RawResponse;
}

#[async_trait]
impl<T: RpcInvoker + ?Sized> RpcInvoker for Arc<T> {
    async fn invoke(&self, method: &str, args: Vec<Value>) -> RawResponse {
        (**self).invoke(method, args).await
    }
}
