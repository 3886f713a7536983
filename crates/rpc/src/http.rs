//! HTTP implementation of the [`RpcInvoker`] port.

use async_trait::async_trait;
use graph::{FailureSentinel, RawResponse, RpcInvoker};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::{ApiToken, ConfigError, EndpointConfig};

/// Internal failure taxonomy for one round trip.
///
/// Never escapes [`HttpInvoker::invoke`]; every variant is converted to a
/// [`FailureSentinel`] there.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("401 Unauthorized")]
    Unauthorized,

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl TransportError {
    /// The sentinel value a caller sees in place of this error.
    pub fn into_sentinel(self) -> FailureSentinel {
        match self {
            Self::Unauthorized => FailureSentinel::unauthorized(),
            other => FailureSentinel::new(other.to_string()),
        }
    }
}

/// Correlates the log events of a single remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallId(Uuid);

impl CallId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for CallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    method: &'a str,
    args: &'a [Value],
}

/// Posts `{method, args}` to `<endpoint>/api` with an optional bearer token.
#[derive(Debug, Clone)]
pub struct HttpInvoker {
    http: reqwest::Client,
    api_url: Url,
    token: Option<ApiToken>,
}

impl HttpInvoker {
    pub fn new(config: EndpointConfig) -> Result<Self, ConfigError> {
        let timeouts = config.timeouts();
        let http = reqwest::Client::builder()
            .timeout(timeouts.request)
            .connect_timeout(timeouts.connect)
            .build()
            .map_err(ConfigError::HttpClientBuild)?;
        Ok(Self {
            http,
            api_url: config.api_url().clone(),
            token: config.token().cloned(),
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    async fn send(&self, method: &str, args: &[Value]) -> Result<Value, TransportError> {
        let mut request = self.http.post(self.api_url.clone()).json(&RpcRequest { method, args });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(TransportError::Unauthorized);
        }
        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl RpcInvoker for HttpInvoker {
    async fn invoke(&self, method: &str, args: Vec<Value>) -> RawResponse {
        let call_id = CallId::new_random();
        let span = tracing::debug_span!("rpc.invoke", %call_id, method);
        async {
            match self.send(method, &args).await {
                Ok(body) => {
                    tracing::debug!("remote call completed");
                    body
                }
                Err(e) => {
                    tracing::warn!(error = %e, url = %self.api_url, "Logseq API request failed");
                    e.into_sentinel().into()
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
