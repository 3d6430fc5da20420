use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use crate::{
    server::AppState,
    transport::{
        middleware::add_response_headers,
        routes::{info, search, stream},
    },
};

const API_PREFIX: &str = "/api";

pub fn router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/search", post(search::search))
        .route("/stream/{video_id}", get(stream::get_stream));

    Router::new()
        .nest(API_PREFIX, api_routes)
        .route("/", get(info::welcome))
        .route("/version", get(info::get_version))
        .layer(middleware::from_fn(add_response_headers))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
