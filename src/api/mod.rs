//! HTTP API handlers
//!
//! Handlers are plain async functions over the parsed request and shared
//! state, so integration tests can call them without a socket.

pub mod passwords;
pub mod todos;
pub mod tools;

use serde::Deserialize;

use crate::server::Response;

/// Common request body for the tool endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ToolRequest {
    #[serde(default)]
    pub input_data: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// Successful tool output; always HTTP 200.
pub(crate) fn tool_result(value: serde_json::Value) -> Response {
    Response::json(&serde_json::json!({ "result": value }))
}

/// Failed tool output; still HTTP 200, the error travels in-band.
pub(crate) fn tool_error(message: impl Into<String>) -> Response {
    Response::json(&serde_json::json!({ "error": message.into() }))
}

pub(crate) fn ok_msg() -> Response {
    Response::json(&serde_json::json!({ "msg": "ok" }))
}
