use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use crate::{
    common::errors::JamlinkError, common::types::VideoId, protocol::models::StreamResponse,
    server::AppState,
};

pub async fn get_stream(
    Path(video_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    info!("GET /api/stream/{}", video_id);

    match state.resolver.resolve(&VideoId::from(video_id.clone())).await {
        Some(url) => (StatusCode::OK, Json(StreamResponse { stream_url: url })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(JamlinkError::not_found(
                "No stream URL found",
                format!("/api/stream/{}", video_id),
            )),
        )
            .into_response(),
    }
}
