//! logseq-mcp entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Parse configuration**: endpoint URL, bearer token and timeout from
//!    flags or `LOGSEQ_*` environment variables, resolved once.
//! 2. **Wire observability**: configure `tracing-subscriber` on stderr (stdout
//!    carries the MCP protocol). All `tracing` spans and events emitted by
//!    every crate in the workspace flow through this layer.
//! 3. **Construct infrastructure**: `EndpointConfig` → `HttpInvoker` →
//!    `GraphClient` → `ToolRegistry` → `McpServer`.
//! 4. **Serve** MCP over stdio until the client closes stdin.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use graph::GraphClient;
use rpc::{EndpointConfig, HttpInvoker, Timeouts, DEFAULT_API_URL};
use server::McpServer;
use tokio::io::BufReader;
use tools::ToolRegistry;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "logseq-mcp", version, about = "MCP server for the Logseq HTTP API")]
struct Cli {
    /// Base URL of the Logseq HTTP API server.
    #[arg(long, env = "LOGSEQ_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Bearer token configured in Logseq's API server settings.
    #[arg(long, env = "LOGSEQ_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(
        long,
        env = "LOGSEQ_TIMEOUT_SECS",
        default_value_t = rpc::config::DEFAULT_REQUEST_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout_secs: u64,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Cli {
    fn endpoint_config(&self) -> Result<EndpointConfig, rpc::ConfigError> {
        let timeouts = Timeouts {
            request: Duration::from_secs(self.timeout_secs),
            ..Timeouts::default()
        };
        Ok(EndpointConfig::new(&self.api_url, self.token.clone())?.with_timeouts(timeouts))
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config = cli.endpoint_config().context("invalid Logseq endpoint configuration")?;
    tracing::info!(
        api_url = %config.api_url(),
        authenticated = config.token().is_some(),
        timeout_secs = cli.timeout_secs,
        "starting logseq-mcp"
    );

    let invoker = HttpInvoker::new(config).context("failed to construct Logseq API client")?;
    let registry = ToolRegistry::new(GraphClient::new(invoker));
    let mut server = McpServer::new(registry);

    server
        .serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("stdio transport failed")?;
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
