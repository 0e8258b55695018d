//! Request dispatch
//!
//! Explicit routing over (method, path segments); the match below is the
//! whole API surface. Static assets for the bundled UI are served from
//! the configured directory.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::request::Request;
use super::response::Response;
use crate::api;
use crate::store::Store;
use crate::vault::Vault;

/// Shared application state
pub struct AppState {
    pub store: Store,
    pub vault: Vault,
    pub static_dir: PathBuf,
}

/// Dispatch a request to its handler.
pub async fn route(state: &Arc<AppState>, req: &Request) -> Response {
    if req.method == "OPTIONS" {
        return Response::no_content();
    }

    let segments: Vec<&str> = req.path.split('/').filter(|s| !s.is_empty()).collect();

    match (req.method.as_str(), segments.as_slice()) {
        ("GET", []) => serve_static(&state.static_dir, "index.html").await,
        ("GET", ["static", rest @ ..]) => serve_static(&state.static_dir, &rest.join("/")).await,

        ("GET", ["api", "todos"]) => api::todos::list(state).await,
        ("POST", ["api", "todos"]) => api::todos::add(state, req).await,
        ("PUT", ["api", "todos", id]) => api::todos::update(state, id, req).await,
        ("DELETE", ["api", "todos", id]) => api::todos::delete(state, id).await,

        ("GET", ["api", "passwords"]) => api::passwords::list(state).await,
        ("POST", ["api", "passwords"]) => api::passwords::add(state, req).await,
        ("DELETE", ["api", "passwords", id]) => api::passwords::delete(state, id).await,

        ("POST", ["api", "tools", tool]) => api::tools::dispatch(tool, req).await,

        _ => Response::not_found(),
    }
}

async fn serve_static(static_dir: &Path, rel: &str) -> Response {
    // Reject anything that could climb out of the asset directory.
    let rel_path = Path::new(rel);
    if rel_path
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Response::not_found();
    }

    let full = static_dir.join(rel_path);
    match tokio::fs::read(&full).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&full).first_or_octet_stream();
            Response::file(bytes, mime.as_ref())
        }
        Err(e) => {
            debug!("static asset {} unavailable: {}", full.display(), e);
            Response::not_found()
        }
    }
}
