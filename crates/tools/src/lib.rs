//! Tool catalogue and dispatch for the Logseq graph façade.
//!
//! This crate maps externally callable tool names (`get_page`,
//! `insert_block`, ...) onto [`graph::GraphClient`] operations. It validates
//! primitive argument types and returns the façade's result unchanged; it
//! contains no normalization rules of its own.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** Sits between the inbound protocol (`server`) and
//! the domain façade (`graph`).

pub mod args;
pub mod catalog;
pub mod error;
pub mod registry;

pub use catalog::{tool_definitions, Tool};
pub use error::ToolError;
pub use registry::ToolRegistry;
