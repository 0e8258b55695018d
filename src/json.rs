//! JSON utilities
//!
//! Key order is preserved throughout (serde_json `preserve_order`).

use serde::Serialize;

/// Parse JSON while preserving key order.
pub fn load_json_preserve_order(s: &str) -> Result<serde_json::Value, String> {
    serde_json::from_str(s).map_err(|e| format!("JSON parse error: {}", e))
}

/// Serialize a JSON value with four-space indentation.
pub fn to_pretty_four(value: &serde_json::Value) -> String {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    if value.serialize(&mut ser).is_err() {
        return value.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| value.to_string())
}
