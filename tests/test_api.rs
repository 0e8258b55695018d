//! In-process API tests
//!
//! Requests are built by hand and pushed straight through the router, so
//! these cover the whole handler surface without binding a socket.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};
use tempfile::TempDir;

use toolbench::server::{route, AppState, Request, Response};
use toolbench::store::Store;
use toolbench::vault::Vault;

fn state(dir: &TempDir) -> Arc<AppState> {
    let store = Store::open(dir.path().join("toolbench.json")).unwrap();
    let vault = Vault::open(dir.path().join("vault.key")).unwrap();
    Arc::new(AppState {
        store,
        vault,
        static_dir: dir.path().join("static"),
    })
}

fn req(method: &str, path: &str, body: Value) -> Request {
    Request {
        method: method.to_string(),
        path: path.to_string(),
        headers: HashMap::new(),
        body: serde_json::to_vec(&body).unwrap(),
    }
}

fn raw_req(method: &str, path: &str, body: &[u8]) -> Request {
    Request {
        method: method.to_string(),
        path: path.to_string(),
        headers: HashMap::new(),
        body: body.to_vec(),
    }
}

fn body_json(resp: &Response) -> Value {
    serde_json::from_slice(&resp.body).unwrap()
}

#[tokio::test]
async fn test_todo_crud_flow() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(&state, &req("POST", "/api/todos", json!({"content": "write tests"}))).await;
    assert_eq!(resp.status, 200);
    assert_eq!(body_json(&resp)["msg"], "ok");

    route(&state, &req("POST", "/api/todos", json!({"content": "second"}))).await;

    let resp = route(&state, &req("GET", "/api/todos", Value::Null)).await;
    let todos = body_json(&resp);
    let todos = todos.as_array().unwrap();
    assert_eq!(todos.len(), 2);
    // Same status, so newest first.
    assert_eq!(todos[0]["content"], "second");
    assert_eq!(todos[0]["status"], 0);
    assert!(todos[0]["completed_at"].is_null());

    // Completing the newer item sinks it below the open one.
    let id = todos[0]["id"].as_u64().unwrap();
    let resp = route(
        &state,
        &req("PUT", &format!("/api/todos/{}", id), json!({"status": 1})),
    )
    .await;
    assert_eq!(resp.status, 200);

    let resp = route(&state, &req("GET", "/api/todos", Value::Null)).await;
    let todos = body_json(&resp);
    let todos = todos.as_array().unwrap();
    assert_eq!(todos[0]["content"], "write tests");
    assert_eq!(todos[1]["content"], "second");
    assert_eq!(todos[1]["status"], 1);
    assert!(todos[1]["completed_at"].is_string());

    let resp = route(&state, &req("DELETE", &format!("/api/todos/{}", id), Value::Null)).await;
    assert_eq!(resp.status, 200);

    let resp = route(&state, &req("GET", "/api/todos", Value::Null)).await;
    assert_eq!(body_json(&resp).as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_todo_bad_payload_is_400() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(&state, &raw_req("POST", "/api/todos", b"not json")).await;
    assert_eq!(resp.status, 400);

    let resp = route(&state, &req("PUT", "/api/todos/abc", json!({"status": 1}))).await;
    assert_eq!(resp.status, 400);
}

#[tokio::test]
async fn test_password_flow_round_trips_plaintext() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/passwords",
            json!({
                "title": "mail",
                "account": "alice@example.com",
                "password": "s3cret!",
                "url": "https://mail.example.com",
                "tags": "personal"
            }),
        ),
    )
    .await;
    assert_eq!(resp.status, 200);

    let resp = route(&state, &req("GET", "/api/passwords", Value::Null)).await;
    let entries = body_json(&resp);
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["password"], "s3cret!");
    // Ciphertext never leaves the process.
    assert_eq!(entries[0]["encrypted_pwd"], "");

    let id = entries[0]["id"].as_u64().unwrap();
    let resp = route(
        &state,
        &req("DELETE", &format!("/api/passwords/{}", id), Value::Null),
    )
    .await;
    assert_eq!(resp.status, 200);

    let resp = route(&state, &req("GET", "/api/passwords", Value::Null)).await;
    assert!(body_json(&resp).as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_password_defaults_optional_fields() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/passwords",
            json!({"title": "t", "account": "a", "password": "p"}),
        ),
    )
    .await;
    assert_eq!(resp.status, 200);

    let resp = route(&state, &req("GET", "/api/passwords", Value::Null)).await;
    let entries = body_json(&resp);
    assert_eq!(entries[0]["url"], "");
    assert_eq!(entries[0]["tags"], "");
}

#[tokio::test]
async fn test_tool_success_is_result_at_200() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/tools/curl2py",
            json!({"input_data": "curl http://x.com"}),
        ),
    )
    .await;
    assert_eq!(resp.status, 200);
    let body = body_json(&resp);
    assert!(body["result"].as_str().unwrap().starts_with("import requests"));
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_tool_failure_is_error_at_200() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/tools/curl2py",
            json!({"input_data": "wget http://x.com"}),
        ),
    )
    .await;
    assert_eq!(resp.status, 200);
    assert_eq!(body_json(&resp)["error"], "Need curl command");
}

#[tokio::test]
async fn test_tool_json_format() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/tools/json_format",
            json!({"input_data": "{\"b\":2,\"a\":1}"}),
        ),
    )
    .await;
    assert_eq!(
        body_json(&resp)["result"],
        "{\n    \"b\": 2,\n    \"a\": 1\n}"
    );
}

#[tokio::test]
async fn test_tool_file_hash_takes_raw_body() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(&state, &raw_req("POST", "/api/tools/file_hash", b"abc")).await;
    let body = body_json(&resp);
    assert_eq!(body["result"]["MD5"], "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(
        body["result"]["SHA256"],
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );

    let resp = route(&state, &raw_req("POST", "/api/tools/file_hash", b"")).await;
    assert_eq!(resp.status, 200);
    assert!(body_json(&resp)["error"].is_string());
}

#[tokio::test]
async fn test_tool_time_calc() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/tools/time_calc",
            json!({"params": {"base_time": "2024-03-01 10:00:00", "days": 1, "hours": -2}}),
        ),
    )
    .await;
    assert_eq!(body_json(&resp)["result"], "2024-03-02 08:00:00");
}

#[tokio::test]
async fn test_tool_time_calc_huge_offset_fails_in_band() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/tools/time_calc",
            json!({"params": {"base_time": "2024-03-01 10:00:00", "days": 1.0e18}}),
        ),
    )
    .await;
    assert_eq!(resp.status, 200);
    assert!(body_json(&resp)["error"].is_string());
}

#[tokio::test]
async fn test_tool_timestamp_modes() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/tools/timestamp",
            json!({"input_data": "2024-03-01 10:00:00", "mode": "to_ts"}),
        ),
    )
    .await;
    let ts = body_json(&resp)["result"].as_str().unwrap().to_string();

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/tools/timestamp",
            json!({"input_data": ts, "mode": "to_date"}),
        ),
    )
    .await;
    assert_eq!(body_json(&resp)["result"], "2024-03-01 10:00:00.000");
}

#[tokio::test]
async fn test_tool_encoding() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/tools/encoding",
            json!({"input_data": "hello", "mode": "base64_enc"}),
        ),
    )
    .await;
    assert_eq!(body_json(&resp)["result"], "aGVsbG8=");

    let resp = route(
        &state,
        &req(
            "POST",
            "/api/tools/encoding",
            json!({"input_data": "hello", "mode": "rot13"}),
        ),
    )
    .await;
    assert_eq!(resp.status, 200);
    assert_eq!(body_json(&resp)["error"], "unknown encoding mode");
}

#[tokio::test]
async fn test_unknown_tool_is_404() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(&state, &req("POST", "/api/tools/nonsense", json!({}))).await;
    assert_eq!(resp.status, 404);
}

#[tokio::test]
async fn test_options_preflight() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(&state, &raw_req("OPTIONS", "/api/todos", b"")).await;
    assert_eq!(resp.status, 204);
    let wire = String::from_utf8(resp.to_bytes()).unwrap();
    assert!(wire.contains("Access-Control-Allow-Origin: *\r\n"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let resp = route(&state, &raw_req("GET", "/api/unknown", b"")).await;
    assert_eq!(resp.status, 404);
}

#[tokio::test]
async fn test_static_serving_and_traversal_guard() {
    let dir = TempDir::new().unwrap();
    let state = state(&dir);

    let static_dir = dir.path().join("static");
    std::fs::create_dir_all(&static_dir).unwrap();
    std::fs::write(static_dir.join("index.html"), b"<html>toolbench</html>").unwrap();
    std::fs::write(dir.path().join("outside.txt"), b"secret").unwrap();

    let resp = route(&state, &raw_req("GET", "/", b"")).await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, b"<html>toolbench</html>");
    assert_eq!(
        resp.headers.get("Content-Type").map(String::as_str),
        Some("text/html")
    );

    let resp = route(&state, &raw_req("GET", "/static/index.html", b"")).await;
    assert_eq!(resp.status, 200);

    let resp = route(&state, &raw_req("GET", "/static/../outside.txt", b"")).await;
    assert_eq!(resp.status, 404);

    let resp = route(&state, &raw_req("GET", "/static/missing.css", b"")).await;
    assert_eq!(resp.status, 404);

    assert!(Path::new(&static_dir).join("index.html").exists());
}
