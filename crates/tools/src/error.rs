//! Argument-validation errors for tool calls.

use thiserror::Error;

/// Why a tool call was rejected before reaching the graph.
///
/// Only malformed requests produce these. Once arguments are valid the call
/// always yields a value, whatever the remote endpoint returns.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("arguments must be a JSON object")]
    ArgumentsNotObject,

    #[error("missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: &'static str },
}
