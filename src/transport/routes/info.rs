use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::server::AppState;

pub async fn welcome(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "jamlink API",
        "sources": state.source_manager.source_names(),
        "mirrors": {
            "apiHosts": state.config.mirrors.api_urls.len(),
            "proxyHosts": state.config.mirrors.proxy_urls.len(),
        },
        "usage": {
            "search": "POST /api/search { \"url\": \"<track or playlist url>\" }",
            "stream": "GET /api/stream/{videoId}",
        }
    }))
}

pub async fn get_version() -> impl IntoResponse {
    Json(serde_json::json!({ "version": env!("CARGO_PKG_VERSION") }))
}
