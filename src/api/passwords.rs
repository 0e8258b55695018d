//! Password vault endpoints

use std::sync::Arc;

use serde::Deserialize;

use super::ok_msg;
use crate::server::{AppState, Request, Response};

#[derive(Debug, Deserialize)]
pub struct PasswordPayload {
    pub title: String,
    pub account: String,
    pub password: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tags: String,
}

pub async fn list(state: &Arc<AppState>) -> Response {
    let entries = state.store.list_passwords(&state.vault).await;
    Response::json_of(&entries)
}

pub async fn add(state: &Arc<AppState>, req: &Request) -> Response {
    let payload: PasswordPayload = match req.json() {
        Ok(p) => p,
        Err(e) => return Response::bad_request(&e.to_string()),
    };
    match state
        .store
        .add_password(
            &state.vault,
            payload.title,
            payload.account,
            &payload.password,
            payload.url,
            payload.tags,
        )
        .await
    {
        Ok(_) => ok_msg(),
        Err(e) => Response::server_error(&e.to_string()),
    }
}

pub async fn delete(state: &Arc<AppState>, id: &str) -> Response {
    let Ok(id) = id.parse::<u64>() else {
        return Response::bad_request("invalid password id");
    };
    match state.store.delete_password(id).await {
        Ok(_) => ok_msg(),
        Err(e) => Response::server_error(&e.to_string()),
    }
}
