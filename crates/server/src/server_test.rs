use async_trait::async_trait;
use graph::{GraphClient, RawResponse};

use super::*;

/// Answers every remote call with the same body.
struct FixedInvoker(Value);

#[async_trait]
impl RpcInvoker for FixedInvoker {
    async fn invoke(&self, _method: &str, _args: Vec<Value>) -> RawResponse {
        self.0.clone()
    }
}

fn server(remote: Value) -> McpServer<FixedInvoker> {
    McpServer::new(ToolRegistry::new(GraphClient::new(FixedInvoker(remote))))
}

async fn initialized(remote: Value) -> McpServer<FixedInvoker> {
    let mut s = server(remote);
    s.handle_line(r#"{"jsonrpc":"2.0","id":0,"method":"initialize","params":{}}"#)
        .await
        .unwrap();
    assert!(s
        .handle_line(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
        .await
        .is_none());
    s
}

fn tool_text(response: &Value) -> Value {
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    serde_json::from_str(text).unwrap()
}

// =============================================================================
// Handshake
// =============================================================================

#[tokio::test]
async fn initialize_reports_server_info() {
    let mut s = server(Value::Null);
    let response = s
        .handle_line(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
        .await
        .unwrap();
    assert_eq!(response["id"], json!(1));
    assert_eq!(response["result"]["protocolVersion"], json!(MCP_VERSION));
    assert_eq!(response["result"]["serverInfo"]["name"], json!(SERVER_NAME));
    assert!(response["result"]["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn requests_before_initialized_are_refused() {
    let mut s = server(Value::Null);
    let response = s
        .handle_line(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
        .await
        .unwrap();
    assert_eq!(response["error"]["code"], json!(NOT_INITIALIZED));
}

#[tokio::test]
async fn ping_and_unknown_method() {
    let mut s = initialized(Value::Null).await;
    let pong = s.handle_line(r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#).await.unwrap();
    assert_eq!(pong["result"], json!({}));

    let missing = s
        .handle_line(r#"{"jsonrpc":"2.0","id":4,"method":"resources/subscribe"}"#)
        .await
        .unwrap();
    assert_eq!(missing["error"]["code"], json!(METHOD_NOT_FOUND));
}

#[tokio::test]
async fn parse_error_has_null_id() {
    let mut s = server(Value::Null);
    let response = s.handle_line("{not json").await.unwrap();
    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["error"]["code"], json!(PARSE_ERROR));
}

#[tokio::test]
async fn request_without_method_is_invalid_request() {
    let mut s = server(Value::Null);
    let response = s.handle_line(r#"{"jsonrpc":"2.0","id":12}"#).await.unwrap();
    assert_eq!(response["id"], json!(12));
    assert_eq!(response["error"]["code"], json!(INVALID_REQUEST));

    let response = s.handle_line("[1, 2]").await.unwrap();
    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["error"]["code"], json!(INVALID_REQUEST));
}

#[tokio::test]
async fn null_id_is_a_request_not_a_notification() {
    let mut s = initialized(Value::Null).await;
    let response = s
        .handle_line(r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#)
        .await
        .unwrap();
    assert_eq!(response["id"], Value::Null);
    assert_eq!(response["result"], json!({}));

    let silent = s.handle_line(r#"{"jsonrpc":"2.0","method":"ping"}"#).await;
    assert!(silent.is_none());
}

// =============================================================================
// Tools
// =============================================================================

#[tokio::test]
async fn tools_list_returns_catalogue() {
    let mut s = initialized(Value::Null).await;
    let response = s
        .handle_line(r#"{"jsonrpc":"2.0","id":5,"method":"tools/list"}"#)
        .await
        .unwrap();
    let listed = response["result"]["tools"].as_array().unwrap();
    assert_eq!(listed.len(), tools::Tool::ALL.len());
    assert!(listed.iter().any(|t| t["name"] == json!("search_blocks")));
}

#[tokio::test]
async fn tools_call_renders_result_as_text() {
    let mut s = initialized(json!({ "blocks": [{ "id": 1 }] })).await;
    let response = s
        .handle_line(
            r#"{"jsonrpc":"2.0","id":6,"method":"tools/call","params":{"name":"search_blocks","arguments":{"query":"term"}}}"#,
        )
        .await
        .unwrap();
    assert_eq!(response["result"]["isError"], json!(false));
    assert_eq!(tool_text(&response), json!([{ "id": 1 }]));
}

// A transport failure is tool output, not a tool error.
#[tokio::test]
async fn tools_call_passes_sentinel_through_as_content() {
    let sentinel = json!({ "success": false, "error": "connection refused" });
    let mut s = initialized(sentinel.clone()).await;
    let response = s
        .handle_line(
            r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"remove_block","arguments":{"block_id":"b"}}}"#,
        )
        .await
        .unwrap();
    assert_eq!(response["result"]["isError"], json!(false));
    assert_eq!(tool_text(&response), sentinel);
}

#[tokio::test]
async fn tools_call_argument_errors_set_is_error() {
    let mut s = initialized(Value::Null).await;
    let response = s
        .handle_line(
            r#"{"jsonrpc":"2.0","id":8,"method":"tools/call","params":{"name":"get_page","arguments":{}}}"#,
        )
        .await
        .unwrap();
    assert_eq!(response["result"]["isError"], json!(true));
    assert!(tool_text(&response)["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn tools_call_requires_object_params() {
    let mut s = initialized(Value::Null).await;
    let response = s
        .handle_line(r#"{"jsonrpc":"2.0","id":9,"method":"tools/call","params":[]}"#)
        .await
        .unwrap();
    assert_eq!(response["error"]["code"], json!(INVALID_PARAMS));
}

// =============================================================================
// Stdio loop
// =============================================================================

#[tokio::test]
async fn serve_writes_one_line_per_request() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_page","arguments":{"name":"NoSuchPage"}}}"#,
        "\n",
    );
    let mut out = Vec::new();
    server(Value::Null).serve(input.as_bytes(), &mut out).await.unwrap();

    let lines: Vec<Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["id"], json!(1));
    assert_eq!(lines[1]["id"], json!(2));
    assert_eq!(tool_text(&lines[1]), Value::Null);
}
