//! Newline-delimited JSON-RPC transport.
//!
//! Each line read is one message. Requests are handled concurrently and
//! answered in completion order through a single writer task, so one slow
//! upstream call never holds back a `ping`.

use crate::protocol::{
    CallToolParams, InitializeResult, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListToolsResult, ToolInfo, JSONRPC_VERSION,
};
use crate::state::McpState;
use crate::tools::{call_tool, tool_definitions};
use serde::Serialize;
use serde_json::{json, Value};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

const RESPONSE_CHANNEL_CAPACITY: usize = 64;

pub struct McpServer {
    state: McpState,
    tools: Vec<ToolInfo>,
}

fn to_result<T: Serialize>(value: T) -> Result<Value, JsonRpcError> {
    serde_json::to_value(value).map_err(JsonRpcError::internal)
}

impl McpServer {
    pub fn new(state: McpState) -> Self {
        Self {
            state,
            tools: tool_definitions(),
        }
    }

    /// Handle one raw message. `None` means nothing is sent back.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    JsonRpcError::parse_error(e),
                ))
            }
        };

        if value.is_array() {
            return Some(JsonRpcResponse::failure(
                Value::Null,
                JsonRpcError::invalid_request("batch requests are not supported"),
            ));
        }

        let raw_id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    raw_id,
                    JsonRpcError::invalid_request(e),
                ))
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::failure(
                raw_id,
                JsonRpcError::invalid_request(format!(
                    "unsupported jsonrpc version '{}'",
                    request.jsonrpc
                )),
            ));
        }

        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        let response = match self.dispatch(&request.method, request.params).await {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => JsonRpcResponse::failure(id, e),
        };
        Some(response)
    }

    async fn dispatch(&self, method: &str, params: Option<Value>) -> Result<Value, JsonRpcError> {
        match method {
            "initialize" => {
                let requested = params
                    .as_ref()
                    .and_then(|p| p.get("protocolVersion"))
                    .and_then(Value::as_str);
                info!(protocol_version = ?requested, "Client initialized");
                to_result(InitializeResult::for_client(requested))
            }
            "ping" => Ok(json!({})),
            "tools/list" => to_result(ListToolsResult {
                tools: self.tools.clone(),
            }),
            "tools/call" => {
                let params: CallToolParams = params
                    .ok_or_else(|| JsonRpcError::invalid_params("missing params"))
                    .and_then(|p| serde_json::from_value(p).map_err(JsonRpcError::invalid_params))?;
                let result = call_tool(&self.state, params).await?;
                to_result(result)
            }
            other => Err(JsonRpcError::method_not_found(other)),
        }
    }

    /// Serve until `reader` reaches EOF. In-flight requests are answered
    /// before this returns.
    pub async fn serve<R, W>(self: Arc<Self>, reader: R, writer: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<JsonRpcResponse>(RESPONSE_CHANNEL_CAPACITY);

        let writer_task = tokio::spawn(async move {
            let mut writer = writer;
            while let Some(response) = rx.recv().await {
                let mut line = match serde_json::to_vec(&response) {
                    Ok(line) => line,
                    Err(e) => {
                        error!(error = %e, "Failed to encode response");
                        continue;
                    }
                };
                line.push(b'\n');
                writer.write_all(&line).await?;
                writer.flush().await?;
            }
            Ok::<(), io::Error>(())
        });

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let server = Arc::clone(&self);
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_message(&line).await {
                    if tx.send(response).await.is_err() {
                        debug!("Response writer closed");
                    }
                }
            });
        }
        drop(tx);
        debug!("Input closed, draining responses");

        writer_task.await.map_err(io::Error::other)?
    }

    pub async fn run_stdio(self: Arc<Self>) -> io::Result<()> {
        info!(tools = self.tools.len(), "MCP server listening on stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }
}
