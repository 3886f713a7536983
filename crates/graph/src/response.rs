//! Response-shape discrimination and per-operation normalization policies.
//!
//! The Logseq plugin API is inconsistent about how it wraps results. The same
//! logical answer may arrive as a bare list, a bare object, `{result: …}`,
//! `{error: …}`, `{blocks: …}` (search only), `null`, or a transport
//! [`FailureSentinel`](crate::FailureSentinel). [`ResponseShape::classify`] is
//! the single place that inspects JSON structure; every policy below matches
//! on the resulting variant and nothing else.
//!
//! ## Error absorption
//!
//! Read policies ([`into_list`], [`into_search_results`], [`into_single`])
//! turn every failure into "no results" or "not found". Callers cannot tell a
//! failed call from an empty one. This is the contract the tool surface relies
//! on and is pinned by tests; do not turn it into an error return.
//!
//! Mutation policy ([`into_opaque`]) unwraps `result` and otherwise hands the
//! raw response back, so failures reach the caller verbatim.

use serde_json::{Map, Value};

/// The unprocessed JSON value returned by one remote call.
pub type RawResponse = Value;

const RESULT_KEY: &str = "result";
const ERROR_KEY: &str = "error";
const BLOCKS_KEY: &str = "blocks";

// ---------------------------------------------------------------------------
// Discriminator
// ---------------------------------------------------------------------------

/// Which wrapper keys the discriminator recognises for a given operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `result` and `error` wrappers, `result` first.
    Standard,
    /// `result` and `error` wrappers, `error` first. Used by single-object
    /// reads, where an error body means "not found" even next to `result`.
    Single,
    /// `blocks`, `result` and `error` wrappers, in that precedence.
    Search,
}

/// Closed set of response envelopes observed from the remote endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// JSON `null`.
    Null,
    /// A bare JSON array.
    List(Vec<Value>),
    /// `{result: X}`; carries `X`, which may itself be `null`.
    Wrapped(Value),
    /// An object carrying `error` (remote failure or transport sentinel);
    /// carries the whole object so mutations can surface it unchanged.
    ErrorTagged(Map<String, Value>),
    /// `{blocks: B}` (search envelope only); carries `B`.
    BlocksWrapped(Value),
    /// Anything else: a direct payload object or a scalar.
    Raw(Value),
}

impl ResponseShape {
    /// Classifies a raw response.
    ///
    /// Precedence is `blocks` (search envelope only), then `result`, then
    /// `error`. The single envelope checks `error` before `result`. An object
    /// that has none of the recognised keys is [`Raw`].
    ///
    /// [`Raw`]: ResponseShape::Raw
    pub fn classify(raw: RawResponse, envelope: Envelope) -> Self {
        match raw {
            Value::Null => Self::Null,
            Value::Array(items) => Self::List(items),
            Value::Object(mut obj) => {
                if envelope == Envelope::Search && obj.contains_key(BLOCKS_KEY) {
                    return Self::BlocksWrapped(obj.remove(BLOCKS_KEY).unwrap_or(Value::Null));
                }
                if envelope == Envelope::Single && obj.contains_key(ERROR_KEY) {
                    return Self::ErrorTagged(obj);
                }
                if obj.contains_key(RESULT_KEY) {
                    return Self::Wrapped(obj.remove(RESULT_KEY).unwrap_or(Value::Null));
                }
                if obj.contains_key(ERROR_KEY) {
                    return Self::ErrorTagged(obj);
                }
                Self::Raw(Value::Object(obj))
            }
            scalar => Self::Raw(scalar),
        }
    }
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// List-shaped reads (all pages, page blocks, linked references).
///
/// A bare list is returned as-is, `{result: L}` yields `L` when it is a list.
/// Every other shape, remote errors and transport failures included, yields
/// an empty list.
pub fn into_list(raw: RawResponse) -> Vec<Value> {
    match ResponseShape::classify(raw, Envelope::Standard) {
        ResponseShape::List(items) => items,
        ResponseShape::Wrapped(inner) => list_or_empty(inner),
        ResponseShape::Null
        | ResponseShape::ErrorTagged(_)
        | ResponseShape::BlocksWrapped(_)
        | ResponseShape::Raw(_) => Vec::new(),
    }
}

/// Search results.
///
/// `{blocks: B}` wins over a simultaneous `result` key. `null` and error
/// bodies yield an empty list.
pub fn into_search_results(raw: RawResponse) -> Vec<Value> {
    match ResponseShape::classify(raw, Envelope::Search) {
        ResponseShape::List(items) => items,
        ResponseShape::BlocksWrapped(inner) | ResponseShape::Wrapped(inner) => list_or_empty(inner),
        ResponseShape::Null | ResponseShape::ErrorTagged(_) | ResponseShape::Raw(_) => Vec::new(),
    }
}

/// Single-object reads (page, block).
///
/// `null`, error bodies and `{result: null}` are "not found". An `error` key
/// wins over a simultaneous `result`. `{result: X}` and a direct payload are
/// treated identically.
pub fn into_single(raw: RawResponse) -> Option<Value> {
    match ResponseShape::classify(raw, Envelope::Single) {
        ResponseShape::Null | ResponseShape::ErrorTagged(_) => None,
        ResponseShape::Wrapped(Value::Null) => None,
        ResponseShape::Wrapped(inner) | ResponseShape::BlocksWrapped(inner) | ResponseShape::Raw(inner) => {
            Some(inner)
        }
        ResponseShape::List(items) => Some(Value::Array(items)),
    }
}

/// Mutations and other opaque results.
///
/// `{result: X}` yields `X`; anything else is returned unchanged, so remote
/// errors and transport sentinels reach the caller.
pub fn into_opaque(raw: RawResponse) -> Value {
    match ResponseShape::classify(raw, Envelope::Standard) {
        ResponseShape::Wrapped(inner) => inner,
        ResponseShape::Null => Value::Null,
        ResponseShape::List(items) => Value::Array(items),
        ResponseShape::ErrorTagged(obj) => Value::Object(obj),
        ResponseShape::BlocksWrapped(inner) | ResponseShape::Raw(inner) => inner,
    }
}

/// Block property maps.
///
/// `{result: {…}}` yields the map, a bare object (error bodies included) is
/// returned as the map, and anything else is an empty map.
pub fn into_properties(raw: RawResponse) -> Map<String, Value> {
    match ResponseShape::classify(raw, Envelope::Standard) {
        ResponseShape::Wrapped(Value::Object(map)) | ResponseShape::Raw(Value::Object(map)) => map,
        ResponseShape::ErrorTagged(map) => map,
        _ => Map::new(),
    }
}

fn list_or_empty(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod tests;
