//! Logseq graph domain: operation façade and response normalization.
//!
//! This crate turns a fixed set of logical graph operations (fetch a page,
//! insert a block, search, ...) into calls on one generic remote method
//! endpoint, and reconciles the inconsistent envelopes that endpoint returns
//! into a fixed result type per operation.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! The transport is supplied through the [`RpcInvoker`] trait; the `rpc`
//! crate provides the HTTP implementation.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | `PageName`, `BlockId` newtypes |
//! | [`response`] | `ResponseShape` discriminator and per-shape normalization policies |
//! | [`operations`] | Remote method names and their result policies |
//! | [`invoker`] | The `RpcInvoker` port trait |
//! | [`client`] | `GraphClient`, one method per operation |
//! | [`errors`] | `FailureSentinel`, the never-raise failure encoding |

pub mod client;
pub mod errors;
pub mod identifiers;
pub mod invoker;
pub mod operations;
pub mod response;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use client::{GraphClient, Properties};
pub use errors::{FailureSentinel, UNAUTHORIZED_MESSAGE};
pub use identifiers::{BlockId, PageName};
pub use invoker::RpcInvoker;
pub use operations::{Operation, Policy, ResultShape};
pub use response::{Envelope, RawResponse, ResponseShape};
