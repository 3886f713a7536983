//! MCP server exposing the Logseq tool registry over stdio.
//!
//! Speaks newline-delimited JSON-RPC 2.0: one request per line on the input,
//! one response per line on the output. Logging must go to stderr; stdout
//! belongs to the protocol.
//!
//! ## Architectural Layer
//!
//! **Infrastructure (inbound).** Framing, the MCP handshake and result
//! rendering live here. Tool semantics belong to the `tools` crate.

pub mod protocol;
pub mod server;

pub use protocol::{JsonRpcRequest, MCP_VERSION, SERVER_NAME};
pub use server::McpServer;
