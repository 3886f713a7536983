//! Newtype identifiers for graph entities.
//!
//! Pages are addressed by name and blocks by their UUID string. Both are plain
//! strings on the wire, so each gets its own newtype to prevent passing a page
//! name where a block id is expected. Neither type interprets its contents:
//! journal page names (`"Apr 4th, 2025"`) and block UUIDs are forwarded to the
//! remote API unchanged.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display, From<_> for Value.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&$name> for serde_json::Value {
            fn from(id: &$name) -> Self {
                serde_json::Value::String(id.0.clone())
            }
        }
    };
}

string_id! {
    /// Identifies a page by its display name.
    ///
    /// Journal pages use the graph's configured date format, e.g. `"Apr 4th, 2025"`.
    PageName
}

string_id! {
    /// Identifies a block by its UUID string.
    BlockId
}

#[cfg(test)]
#[path = "identifiers_test.rs"]
mod tests;
