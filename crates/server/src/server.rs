//! Request handling for one MCP session.

use graph::RpcInvoker;
use serde_json::{json, Value};
use tools::{tool_definitions, ToolRegistry};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::protocol::{
    json_rpc_error, json_rpc_response, tool_text_content, JsonRpcRequest, INVALID_PARAMS, INVALID_REQUEST,
    MCP_VERSION, METHOD_NOT_FOUND, NOT_INITIALIZED, PARSE_ERROR, SERVER_NAME, SERVER_VERSION,
};

/// One MCP session: handshake state plus the tool registry it serves.
pub struct McpServer<I> {
    initialized: bool,
    registry: ToolRegistry<I>,
}

impl<I: RpcInvoker> McpServer<I> {
    pub fn new(registry: ToolRegistry<I>) -> Self {
        Self {
            initialized: false,
            registry,
        }
    }

    /// Reads newline-delimited requests until EOF, writing one response line
    /// per request. Requests are handled one at a time.
    pub async fn serve<R, W>(&mut self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let Some(response) = self.handle_line(&line).await else {
                continue;
            };
            let mut out = serde_json::to_vec(&response)?;
            out.push(b'\n');
            writer.write_all(&out).await?;
            writer.flush().await?;
        }
        tracing::info!("stdin closed; shutting down");
        Ok(())
    }

    /// Decodes and handles one line. `None` means nothing should be written.
    pub async fn handle_line(&mut self, line: &str) -> Option<Value> {
        let value = match serde_json::from_str::<Value>(line) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable request line");
                return Some(json_rpc_error(None, PARSE_ERROR, &format!("Parse error: {e}")));
            }
        };
        let id = value.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                tracing::warn!(error = %e, "malformed request");
                Some(json_rpc_error(id, INVALID_REQUEST, &format!("Invalid Request: {e}")))
            }
        }
    }

    pub async fn handle(&mut self, request: JsonRpcRequest) -> Option<Value> {
        let notification = request.is_notification();
        let response = self.dispatch(request).await;
        if notification {
            return None;
        }
        response
    }

    async fn dispatch(&mut self, request: JsonRpcRequest) -> Option<Value> {
        let method = request.method.as_str();

        if method == "initialize" {
            return Some(json_rpc_response(
                request.id,
                json!({
                    "protocolVersion": MCP_VERSION,
                    "serverInfo": { "name": SERVER_NAME, "version": SERVER_VERSION },
                    "capabilities": { "tools": {} }
                }),
            ));
        }

        if method == "notifications/initialized" {
            self.initialized = true;
            return None;
        }

        if !self.initialized {
            return Some(json_rpc_error(request.id, NOT_INITIALIZED, "Server not initialized"));
        }

        match method {
            "ping" => Some(json_rpc_response(request.id, json!({}))),
            "tools/list" => Some(json_rpc_response(request.id, json!({ "tools": tool_definitions() }))),
            "tools/call" => Some(self.call_tool(request.id, request.params).await),
            other => Some(json_rpc_error(
                request.id,
                METHOD_NOT_FOUND,
                &format!("Method not found: {other}"),
            )),
        }
    }

    async fn call_tool(&self, id: Option<Value>, params: Option<Value>) -> Value {
        let Some(Value::Object(mut params)) = params else {
            return json_rpc_error(id, INVALID_PARAMS, "params must be an object");
        };
        let Some(Value::String(name)) = params.remove("name") else {
            return json_rpc_error(id, INVALID_PARAMS, "params.name must be a string");
        };
        let arguments = params.remove("arguments").unwrap_or(Value::Null);

        tracing::info!(tool = %name, "tools/call");
        let (body, is_error) = match self.registry.call(&name, arguments).await {
            Ok(output) => (output, false),
            Err(e) => {
                tracing::warn!(tool = %name, error = %e, "tool call rejected");
                (json!({ "error": e.to_string() }), true)
            }
        };

        json_rpc_response(
            id,
            json!({
                "content": [tool_text_content(&body)],
                "isError": is_error,
            }),
        )
    }
}

#[cfg(test)]
#[path = "server_test.rs"]
mod tests;
