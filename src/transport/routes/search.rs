use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use futures::future::join_all;
use tracing::{info, warn};

use crate::{
    common::errors::JamlinkError,
    common::types::VideoId,
    protocol::models::{ResolvedPlaylist, ResolvedTrack, SearchRequest, SearchResponse},
    protocol::tracks::LoadResult,
    server::AppState,
};

const PATH: &str = "/api/search";

/// Strip tracking parameters (`?si=...`) before dispatching to a source.
fn clean_url(raw: &str) -> &str {
    raw.split('?').next().unwrap_or(raw)
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SearchRequest>,
) -> impl IntoResponse {
    info!("POST {} url={}", PATH, req.url);
    let identifier = clean_url(&req.url);

    match state.source_manager.load(identifier).await {
        LoadResult::Track(track) => {
            let query = format!("{} {}", track.title, track.artist);
            let video = state.youtube.search(&query).await;

            let stream_url = match &video {
                Some(v) => state.resolver.resolve(&VideoId::from(v.id.as_str())).await,
                None => {
                    warn!("No video match for '{}'", query);
                    None
                }
            };

            (
                StatusCode::OK,
                Json(SearchResponse::Track(ResolvedTrack {
                    track,
                    video,
                    stream_url,
                })),
            )
                .into_response()
        }
        LoadResult::Playlist(playlist) => {
            // Match every playlist track to a video; stream URLs are left to
            // the stream endpoint so a long playlist doesn't trigger a
            // resolution sweep per track up front.
            let futs = playlist.tracks.into_iter().map(|track| {
                let youtube = state.youtube.clone();
                async move {
                    let query = format!("{} {}", track.title, track.artist);
                    let video = youtube.search(&query).await;
                    ResolvedTrack {
                        track,
                        video,
                        stream_url: None,
                    }
                }
            });
            let tracks = join_all(futs).await;

            (
                StatusCode::OK,
                Json(SearchResponse::Playlist(ResolvedPlaylist {
                    title: playlist.title,
                    description: playlist.description,
                    artwork_url: playlist.artwork_url,
                    uri: playlist.uri,
                    tracks,
                })),
            )
                .into_response()
        }
        LoadResult::Empty {} => (
            StatusCode::NOT_FOUND,
            Json(JamlinkError::not_found(
                "No source recognized the URL, or nothing was found",
                PATH,
            )),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_url_strips_tracking_params() {
        assert_eq!(
            clean_url("https://open.spotify.com/track/abc?si=xyz123&utm_source=copy"),
            "https://open.spotify.com/track/abc"
        );
        assert_eq!(
            clean_url("https://open.spotify.com/track/abc"),
            "https://open.spotify.com/track/abc"
        );
    }
}
