//! Primitive argument validation for tool calls.

use graph::{BlockId, PageName, Properties};
use serde_json::{Map, Value};

use crate::ToolError;

/// A validated `arguments` object.
pub struct Arguments(Map<String, Value>);

impl Arguments {
    /// Accepts an object, or `null`/absent as an empty object.
    pub fn parse(raw: Value) -> Result<Self, ToolError> {
        match raw {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self(Map::new())),
            _ => Err(ToolError::ArgumentsNotObject),
        }
    }

    /// A required string argument. Empty strings are accepted.
    pub fn string(&self, name: &'static str) -> Result<&str, ToolError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Err(ToolError::MissingArgument(name)),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(ToolError::InvalidArgument {
                name,
                reason: "expected a string",
            }),
        }
    }

    pub fn page_name(&self, name: &'static str) -> Result<PageName, ToolError> {
        PageName::new(self.string(name)?).ok_or(ToolError::InvalidArgument {
            name,
            reason: "page name must not be empty",
        })
    }

    pub fn block_id(&self, name: &'static str) -> Result<BlockId, ToolError> {
        BlockId::new(self.string(name)?).ok_or(ToolError::InvalidArgument {
            name,
            reason: "block id must not be empty",
        })
    }

    /// An optional boolean flag, `false` when absent.
    pub fn flag(&self, name: &'static str) -> Result<bool, ToolError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(ToolError::InvalidArgument {
                name,
                reason: "expected a boolean",
            }),
        }
    }

    /// An optional property map.
    pub fn properties(&self, name: &'static str) -> Result<Option<&Properties>, ToolError> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(ToolError::InvalidArgument {
                name,
                reason: "expected an object",
            }),
        }
    }
}

#[cfg(test)]
#[path = "args_test.rs"]
mod tests;
