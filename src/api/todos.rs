//! Todo endpoints

use std::sync::Arc;

use serde::Deserialize;

use super::ok_msg;
use crate::server::{AppState, Request, Response};

#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    pub content: String,
    #[serde(default)]
    pub status: i64,
}

#[derive(Debug, Deserialize)]
pub struct TodoUpdatePayload {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
}

pub async fn list(state: &Arc<AppState>) -> Response {
    let todos = state.store.list_todos().await;
    Response::json_of(&todos)
}

pub async fn add(state: &Arc<AppState>, req: &Request) -> Response {
    let payload: TodoPayload = match req.json() {
        Ok(p) => p,
        Err(e) => return Response::bad_request(&e.to_string()),
    };
    match state.store.add_todo(payload.content).await {
        Ok(_) => ok_msg(),
        Err(e) => Response::server_error(&e.to_string()),
    }
}

pub async fn update(state: &Arc<AppState>, id: &str, req: &Request) -> Response {
    let Ok(id) = id.parse::<u64>() else {
        return Response::bad_request("invalid todo id");
    };
    let payload: TodoUpdatePayload = match req.json() {
        Ok(p) => p,
        Err(e) => return Response::bad_request(&e.to_string()),
    };
    match state
        .store
        .update_todo(id, payload.content, payload.status)
        .await
    {
        Ok(_) => ok_msg(),
        Err(e) => Response::server_error(&e.to_string()),
    }
}

pub async fn delete(state: &Arc<AppState>, id: &str) -> Response {
    let Ok(id) = id.parse::<u64>() else {
        return Response::bad_request("invalid todo id");
    };
    match state.store.delete_todo(id).await {
        Ok(_) => ok_msg(),
        Err(e) => Response::server_error(&e.to_string()),
    }
}
