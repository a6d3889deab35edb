//! MCP server over stdio.
//!
//! Implements the JSON-RPC 2.0 dispatch for the Model Context
//! Protocol: `initialize`, `tools/list`, `tools/call`, `ping`.
//! Requests arrive one per line on stdin; responses leave one per line
//! on stdout. Notifications (requests without an id) get no response.
//! All diagnostics go to stderr via `tracing` - stdout belongs to the
//! protocol.

mod tools;

use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::client::CoupangClient;
use crate::error::ApiResult;

/// Server identifier reported during the initialize handshake.
pub const SERVER_NAME: &str = "coupang-mcp";
/// Protocol version for MCP.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Standard JSON-RPC 2.0 request envelope.
#[derive(Debug, Deserialize)]
struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    jsonrpc: Option<String>,
    /// Method name to invoke
    method: String,
    /// Parameters for the method
    params: Option<Value>,
    /// Request identifier; absent for notifications
    id: Option<Value>,
}

/// Build a JSON-RPC 2.0 success envelope.
fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Build a JSON-RPC 2.0 error envelope.
fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// Handle the `initialize` handshake.
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Dispatch one parsed request. Returns `None` for notifications.
async fn dispatch(client: &CoupangClient, req: JsonRpcRequest) -> Option<Value> {
    let id = req.id?;
    let params = req.params.unwrap_or(Value::Null);

    debug!("MCP call: {} (id: {})", req.method, id);

    let response = match req.method.as_str() {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "ping" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, tools::tools_list()),
        "tools/call" => {
            let tool_name = params.get("name").and_then(Value::as_str).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);

            match tools::handle_tool_call(client, tool_name, args).await {
                Ok(result) => rpc_success(id, result),
                Err(msg) => rpc_error(id, -32602, msg),
            }
        }
        other => {
            debug!("Unknown method: {}", other);
            rpc_error(id, -32601, "Method not found")
        }
    };

    Some(response)
}

/// Run the stdio server loop until stdin closes.
///
/// # Errors
///
/// Fails only on stdio I/O errors; tool-level failures are rendered as
/// text results and never abort the loop.
pub async fn run(client: CoupangClient) -> ApiResult<()> {
    info!("Starting {} MCP server on stdio", SERVER_NAME);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| crate::error::ApiError::Transport(format!("stdin: {}", e)))?
    {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
            Ok(req) => dispatch(&client, req).await,
            Err(e) => {
                error!("JSON parse error: {}", e);
                Some(rpc_error(Value::Null, -32700, "Parse error"))
            }
        };

        if let Some(response) = response {
            let mut out = response.to_string();
            out.push('\n');
            stdout
                .write_all(out.as_bytes())
                .await
                .map_err(|e| crate::error::ApiError::Transport(format!("stdout: {}", e)))?;
            stdout
                .flush()
                .await
                .map_err(|e| crate::error::ApiError::Transport(format!("stdout: {}", e)))?;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}
