//! HTTP response construction and serialization

use std::collections::HashMap;

/// An outbound HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// 200 JSON response. Tool endpoints always use this and report
    /// failures in-band via an `error` field.
    pub fn json(value: &serde_json::Value) -> Self {
        let mut resp = Self::new(200);
        resp.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        resp.body = value.to_string().into_bytes();
        resp
    }

    /// 200 JSON response from any serializable value.
    pub fn json_of<T: serde::Serialize>(value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => {
                let mut resp = Self::new(200);
                resp.headers
                    .insert("Content-Type".to_string(), "application/json".to_string());
                resp.body = body;
                resp
            }
            Err(e) => Self::server_error(&e.to_string()),
        }
    }

    pub fn file(body: Vec<u8>, content_type: &str) -> Self {
        let mut resp = Self::new(200);
        resp.headers
            .insert("Content-Type".to_string(), content_type.to_string());
        resp.body = body;
        resp
    }

    pub fn no_content() -> Self {
        Self::new(204)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::error(400, message)
    }

    pub fn not_found() -> Self {
        Self::error(404, "Not Found")
    }

    pub fn server_error(message: &str) -> Self {
        Self::error(500, message)
    }

    fn error(status: u16, message: &str) -> Self {
        let mut resp = Self::json(&serde_json::json!({ "error": message }));
        resp.status = status;
        resp
    }

    /// Serialize to wire format, adding CORS and Content-Length.
    ///
    /// The UI is same-origin, but the original tool ran with allow-all
    /// CORS; that contract is kept.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!("HTTP/1.1 {} {}\r\n", self.status, status_text(self.status));
        for (name, value) in &self.headers {
            head.push_str(&format!("{}: {}\r\n", name, value));
        }
        head.push_str("Access-Control-Allow-Origin: *\r\n");
        head.push_str("Access-Control-Allow-Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS\r\n");
        head.push_str("Access-Control-Allow-Headers: *\r\n");
        head.push_str("Connection: close\r\n");
        head.push_str(&format!("Content-Length: {}\r\n\r\n", self.body.len()));

        let mut out = head.into_bytes();
        out.extend_from_slice(&self.body);
        out
    }
}

/// HTTP status text for the codes this server emits
pub fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
