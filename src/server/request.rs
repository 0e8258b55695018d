//! HTTP request parsing

use std::collections::HashMap;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::errors::{Result, ToolbenchError};

/// Largest request head we buffer
const MAX_HEAD: usize = 64 * 1024;
/// Largest body we buffer (hash uploads included)
const MAX_BODY: usize = 64 * 1024 * 1024;

/// A parsed inbound HTTP request
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    /// Path with any query string stripped; the API ignores queries
    pub path: String,
    /// Header names lowercased
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Request {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(ToolbenchError::Json)
    }
}

/// Read one request from the stream: incremental reads until the header
/// terminator, then a Content-Length bounded body.
pub async fn read_request<S: AsyncRead + Unpin>(stream: &mut S) -> Result<Request> {
    let mut buf: Vec<u8> = Vec::with_capacity(8192);
    let mut chunk = [0u8; 8192];

    let head_end = loop {
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
        if buf.len() > MAX_HEAD {
            return Err(ToolbenchError::Argument("request head too large".to_string()));
        }
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Err(ToolbenchError::Argument(
                "connection closed mid-request".to_string(),
            ));
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let (method, path, headers) = parse_head(&head)?;

    let content_length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    if content_length > MAX_BODY {
        return Err(ToolbenchError::Argument("request body too large".to_string()));
    }

    let mut body = buf[head_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Err(ToolbenchError::Argument(
                "connection closed mid-body".to_string(),
            ));
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    Ok(Request {
        method,
        path,
        headers,
        body,
    })
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn parse_head(head: &str) -> Result<(String, String, HashMap<String, String>)> {
    let mut lines = head.lines();
    let request_line = lines
        .next()
        .ok_or_else(|| ToolbenchError::Argument("empty request".to_string()))?;

    let mut parts = request_line.split_whitespace();
    let method = parts
        .next()
        .ok_or_else(|| ToolbenchError::Argument("invalid request line".to_string()))?
        .to_string();
    let target = parts
        .next()
        .ok_or_else(|| ToolbenchError::Argument("invalid request line".to_string()))?;

    let path = target
        .split_once('?')
        .map(|(p, _)| p)
        .unwrap_or(target)
        .to_string();

    let mut headers = HashMap::new();
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            headers.insert(name.trim().to_lowercase(), value.trim().to_string());
        }
    }

    Ok((method, path, headers))
}
