use serde::{Deserialize, Serialize};

use crate::protocol::tracks::{TrackInfo, VideoMatch};

/// Body of `POST /api/search`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Catalog track or playlist URL.
    pub url: String,
}

/// A track with its selected video match and, when requested, the
/// resolved direct stream URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTrack {
    #[serde(flatten)]
    pub track: TrackInfo,
    pub video: Option<VideoMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPlaylist {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
    pub uri: String,
    pub tracks: Vec<ResolvedTrack>,
}

/// Response of `POST /api/search`.
#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum SearchResponse {
    Track(ResolvedTrack),
    Playlist(ResolvedPlaylist),
}

/// Response of `GET /api/stream/{video_id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamResponse {
    pub stream_url: String,
}
