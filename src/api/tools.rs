//! Tool endpoints
//!
//! Thin wrappers mapping the `{ input_data, mode, params }` contract onto
//! the pure functions in [`crate::tools`] and [`crate::curl`]. Tool
//! failures are reported in-band with HTTP 200.

use super::{tool_error, tool_result, ToolRequest};
use crate::curl;
use crate::server::{Request, Response};
use crate::tools::{encode, hash, json_fmt, time};

/// Dispatch `/api/tools/{tool}`.
pub async fn dispatch(tool: &str, req: &Request) -> Response {
    // file_hash takes the raw upload bytes, everything else the JSON
    // contract.
    if tool == "file_hash" {
        return file_hash(req);
    }

    let payload: ToolRequest = match req.json() {
        Ok(p) => p,
        Err(e) => return Response::bad_request(&e.to_string()),
    };

    match tool {
        "curl2py" => curl2py(&payload),
        "json_format" => json_format(&payload),
        "time_calc" => time_calc(&payload),
        "timestamp" => timestamp(&payload),
        "encoding" => encoding(&payload),
        _ => Response::not_found(),
    }
}

fn curl2py(payload: &ToolRequest) -> Response {
    match curl::translate(&payload.input_data) {
        Ok(code) => tool_result(code.into()),
        Err(e) => tool_error(e.to_string()),
    }
}

fn json_format(payload: &ToolRequest) -> Response {
    match json_fmt::format_json(&payload.input_data) {
        Ok(pretty) => tool_result(pretty.into()),
        Err(e) => tool_error(e),
    }
}

fn file_hash(req: &Request) -> Response {
    if req.body.is_empty() {
        return tool_error("empty upload");
    }
    let digests = hash::digest_bytes(&req.body);
    match serde_json::to_value(&digests) {
        Ok(value) => tool_result(value),
        Err(e) => tool_error(e.to_string()),
    }
}

fn time_calc(payload: &ToolRequest) -> Response {
    let base = param_str(&payload.params, "base_time");
    let days = param_f64(&payload.params, "days");
    let hours = param_f64(&payload.params, "hours");
    match time::shift_time(base, days, hours) {
        Ok(out) => tool_result(out.into()),
        Err(e) => tool_error(e),
    }
}

fn timestamp(payload: &ToolRequest) -> Response {
    let unit_ms = param_str(&payload.params, "unit") == Some("ms");
    let result = if payload.mode.as_deref() == Some("to_date") {
        time::timestamp_to_date(&payload.input_data, unit_ms)
    } else {
        time::date_to_timestamp(&payload.input_data, unit_ms)
    };
    match result {
        Ok(out) => tool_result(out.into()),
        Err(e) => tool_error(e),
    }
}

fn encoding(payload: &ToolRequest) -> Response {
    let Some(mode) = payload
        .mode
        .as_deref()
        .and_then(encode::EncodingMode::from_str)
    else {
        return tool_error("unknown encoding mode");
    };
    match encode::convert(mode, &payload.input_data) {
        Ok(out) => tool_result(out.into()),
        Err(e) => tool_error(e),
    }
}

fn param_str<'a>(params: &'a Option<serde_json::Value>, key: &str) -> Option<&'a str> {
    params
        .as_ref()
        .and_then(|p| p.get(key))
        .and_then(|v| v.as_str())
}

fn param_f64(params: &Option<serde_json::Value>, key: &str) -> f64 {
    params
        .as_ref()
        .and_then(|p| p.get(key))
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
