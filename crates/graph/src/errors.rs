//! Failure encoding for calls that never raise.
//!
//! Nothing in the call path from [`crate::GraphClient`] down to the transport
//! returns `Err`. A transport or authentication failure is instead encoded as
//! a [`FailureSentinel`]: the reserved JSON object
//! `{ "success": false, "error": "<message>" }`. The sentinel is an ordinary
//! [`RawResponse`](crate::RawResponse) as far as the normalizer is concerned,
//! so it is absorbed by read operations and surfaced by mutations exactly like
//! a remote `{error: …}` body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hint returned when the remote endpoint answers `401 Unauthorized`.
pub const UNAUTHORIZED_MESSAGE: &str =
    "401 Unauthorized: Please provide a valid token in LOGSEQ_TOKEN environment variable";

// ---------------------------------------------------------------------------
// Sentinel
// ---------------------------------------------------------------------------

/// Reserved result shape signalling a transport or authentication failure.
///
/// `success` is always `false`; the type exists so the shape is built in one
/// place instead of with ad hoc `json!` literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureSentinel {
    success: bool,
    error: String,
}

impl FailureSentinel {
    /// Creates a sentinel carrying a transport failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }

    /// The sentinel produced for an HTTP 401 response.
    pub fn unauthorized() -> Self {
        Self::new(UNAUTHORIZED_MESSAGE)
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.error
    }

    /// Recognises a sentinel inside an arbitrary JSON value.
    ///
    /// Only an object with `success: false` and a string `error` matches; a
    /// remote `{error: …}` body without `success` is not a sentinel.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        if obj.get("success").and_then(Value::as_bool) != Some(false) {
            return None;
        }
        let message = obj.get("error")?.as_str()?;
        Some(Self::new(message))
    }
}

impl From<FailureSentinel> for Value {
    fn from(sentinel: FailureSentinel) -> Self {
        serde_json::json!({
            "success": sentinel.success,
            "error": sentinel.error,
        })
    }
}

impl std::fmt::Display for FailureSentinel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

#[cfg(test)]
#[path = "errors_test.rs"]
mod tests;
