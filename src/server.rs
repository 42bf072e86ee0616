//! Asset server
//!
//! Read-only HTTP surface over the asset directory:
//!
//! - `GET /` lists every asset as an HTML gallery
//! - `GET /api/svgs` lists asset names as JSON
//! - `GET /svgs/:filename` returns one asset's bytes, or 404

use crate::error::{ApiError, StorageError};
use crate::store::AssetStore;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info};

const SVG_CONTENT_TYPE: &str = "image/svg+xml";
const NOT_FOUND_BODY: &str = "SVG file not found.";

#[derive(Clone)]
struct AppState {
    store: Arc<AssetStore>,
}

/// Build the router over `store`.
pub fn router(store: AssetStore) -> Router {
    let state = AppState {
        store: Arc::new(store),
    };
    Router::new()
        .route("/", get(index))
        .route("/api/svgs", get(list_json))
        .route("/svgs/:filename", get(fetch))
        .with_state(state)
}

/// Bind `addr` and serve until the process stops.
pub async fn serve(store: AssetStore, addr: SocketAddr) -> Result<(), ApiError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::ConfigError(format!("Failed to bind {}: {}", addr, e)))?;
    info!(%addr, dir = %store.root().display(), "Asset server listening");
    axum::serve(listener, router(store))
        .await
        .map_err(|e| ApiError::StorageError(format!("Server error: {}", e)))
}

async fn list_assets(state: &AppState) -> Result<Vec<String>, StorageError> {
    let store = Arc::clone(&state.store);
    tokio::task::spawn_blocking(move || store.list())
        .await
        .map_err(|e| StorageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))?
}

async fn index(State(state): State<AppState>) -> Response {
    match list_assets(&state).await {
        Ok(names) => Html(render_index(&names)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list assets");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred while listing SVGs: {}", e),
            )
                .into_response()
        }
    }
}

async fn list_json(State(state): State<AppState>) -> Response {
    match list_assets(&state).await {
        Ok(names) => Json(names).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list assets");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

async fn fetch(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    let store = Arc::clone(&state.store);
    let name = filename.clone();
    let result = tokio::task::spawn_blocking(move || store.read(&name))
        .await
        .map_err(|e| StorageError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e)))
        .and_then(|r| r);

    match result {
        Ok(Some(bytes)) => ([(header::CONTENT_TYPE, content_type_for(&filename))], bytes).into_response(),
        Ok(None) => {
            debug!(%filename, "Asset not found");
            (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
        }
        Err(e) => {
            error!(%filename, error = %e, "Failed to read asset");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred while serving SVG: {}", e),
            )
                .into_response()
        }
    }
}

fn content_type_for(filename: &str) -> &'static str {
    if filename.ends_with(".svg") {
        SVG_CONTENT_TYPE
    } else {
        "application/octet-stream"
    }
}

/// Render the gallery page.
pub fn render_index(names: &[String]) -> String {
    let mut body = String::new();
    if names.is_empty() {
        body.push_str("    <p>No SVGs generated yet.</p>\n");
    }
    for name in names {
        let name = escape_html(name);
        body.push_str(&format!(
            "    <figure>\n      <img src=\"/svgs/{0}\" alt=\"{0}\" width=\"250\" height=\"250\">\n      <figcaption><a href=\"/svgs/{0}\">{0}</a></figcaption>\n    </figure>\n",
            name
        ));
    }
    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    <title>Pippin SVG Gallery</title>\n  </head>\n  <body>\n    <h1>Pippin SVG Gallery</h1>\n{}  </body>\n</html>\n",
        body
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
