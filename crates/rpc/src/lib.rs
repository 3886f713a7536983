//! Logseq plugin API transport adapter.
//!
//! Implements the [`graph::RpcInvoker`] trait over the Logseq desktop app's
//! local HTTP API server: every call is a single `POST <endpoint>/api` with a
//! JSON body `{"method": …, "args": […]}` and an optional bearer token.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** HTTP transport, authentication headers, timeouts and
//! failure-to-sentinel conversion live here. The [`graph`] crate sees only
//! [`graph::RpcInvoker`].
//!
//! ## Failure handling
//!
//! [`HttpInvoker`] never returns an error from a call. A 401 becomes the
//! unauthorized [`graph::FailureSentinel`]; connection errors, timeouts, other
//! non-2xx statuses and undecodable bodies become a sentinel carrying the
//! failure message. Each failure is logged with `tracing::warn!`.

pub mod config;
pub mod http;

pub use config::{ApiToken, ConfigError, EndpointConfig, Timeouts, DEFAULT_API_URL};
pub use http::{CallId, HttpInvoker, TransportError};
